//! Error types for fairsplit.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! The split computation itself is total over the floating-point domain and
//! never produces an error: invalid interactive input becomes `NaN` and is
//! rendered inline. The taxonomy below covers the ambient surfaces
//! (configuration, I/O, serialization), each variant carrying a stable error
//! code (e.g., `FSPLIT-C001`) for programmatic handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration issues (parse errors, invalid values, missing files).
    Configuration,
    /// Internal errors (I/O, serialization, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Configuration or value parse errors
    ConfigError = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Main error type for fairsplit operations.
#[derive(Error, Debug)]
pub enum FairsplitError {
    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Explicitly requested configuration file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration, environment, or arguments.
    #[error("invalid value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    // ==========================================================================
    // I/O and serialization errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==========================================================================
    // Generic wrapper (Category: Internal)
    // ==========================================================================
    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FairsplitError {
    /// Map error to a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. } => ExitCode::ConfigError,

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. } => ErrorCategory::Configuration,

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `FSPLIT-{category}{number}` where category is:
    /// - C: Configuration
    /// - X: Internal
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            // Configuration errors (C001-C099)
            Self::ConfigNotFound { .. } => "FSPLIT-C001",
            Self::ConfigParse { .. } => "FSPLIT-C002",
            Self::ConfigInvalid { .. } => "FSPLIT-C003",

            // Internal errors (X001-X099)
            Self::Io(_) => "FSPLIT-X001",
            Self::Json(_) => "FSPLIT-X002",
            Self::Other(_) => "FSPLIT-X099",
        }
    }
}

/// Result type alias for fairsplit operations.
pub type Result<T> = std::result::Result<T, FairsplitError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_category_description() {
        assert_eq!(
            ErrorCategory::Configuration.description(),
            "Configuration error"
        );
        assert_eq!(ErrorCategory::Internal.description(), "Internal error");
    }

    #[test]
    fn error_category_code_prefix() {
        assert_eq!(ErrorCategory::Configuration.code_prefix(), "C");
        assert_eq!(ErrorCategory::Internal.code_prefix(), "X");
    }

    #[test]
    fn configuration_errors_have_correct_category() {
        let err = FairsplitError::ConfigNotFound {
            path: "/etc/fairsplit/config.toml".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = FairsplitError::ConfigInvalid {
            key: "income-a".to_string(),
            value: "-5".to_string(),
            message: "must be non-negative".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn internal_errors_have_correct_category() {
        let err = FairsplitError::Json(serde_json::from_str::<()>("invalid").unwrap_err());
        assert_eq!(err.category(), ErrorCategory::Internal);

        let err = FairsplitError::Other(anyhow::anyhow!("unexpected"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn error_codes_follow_format() {
        let errors: Vec<FairsplitError> = vec![
            FairsplitError::ConfigNotFound {
                path: "test".to_string(),
            },
            FairsplitError::ConfigParse {
                path: "test".to_string(),
                message: "test".to_string(),
            },
            FairsplitError::ConfigInvalid {
                key: "test".to_string(),
                value: "test".to_string(),
                message: "test".to_string(),
            },
            FairsplitError::Other(anyhow::anyhow!("test")),
        ];

        for err in errors {
            let code = err.error_code();
            assert!(
                code.starts_with("FSPLIT-"),
                "Error code {code} should start with FSPLIT-"
            );
        }
    }

    #[test]
    fn exit_codes_are_correct() {
        assert_eq!(
            FairsplitError::ConfigNotFound {
                path: "test".to_string()
            }
            .exit_code(),
            ExitCode::ConfigError
        );
        assert_eq!(
            FairsplitError::ConfigInvalid {
                key: "income-a".to_string(),
                value: "abc".to_string(),
                message: "not a number".to_string(),
            }
            .exit_code(),
            ExitCode::ConfigError
        );
        assert_eq!(
            FairsplitError::Other(anyhow::anyhow!("test")).exit_code(),
            ExitCode::GeneralError
        );
        assert_eq!(i32::from(ExitCode::Success), 0);
    }
}
