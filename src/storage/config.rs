//! Configuration file loading and resolution.
//!
//! Loads configuration from:
//! - Linux/macOS: `~/.config/fairsplit/config.toml`
//! - Windows: `%APPDATA%/fairsplit/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `FAIRSPLIT_INCOME_A` / `FAIRSPLIT_INCOME_B`: default incomes
//! - `FAIRSPLIT_FIXED_COSTS`: default fixed costs
//! - `FAIRSPLIT_FORMAT`: output format (human, json, md)
//! - `FAIRSPLIT_NO_COLOR` or `NO_COLOR`: disable colors (1, true, yes)
//! - `FAIRSPLIT_PRETTY`: pretty-print JSON output (1, true, yes)
//! - `FAIRSPLIT_CONFIG`: override config file path
//!
//! Interactive text entry tolerates anything and shows `NaN` inline; the
//! config surfaces are stricter and reject non-finite or negative amounts
//! up front.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{Cli, InputArgs, OutputFormat};
use crate::core::models::SplitInputs;
use crate::error::{FairsplitError, Result};
use crate::storage::paths::AppPaths;

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for party A's income.
pub const ENV_INCOME_A: &str = "FAIRSPLIT_INCOME_A";
/// Environment variable for party B's income.
pub const ENV_INCOME_B: &str = "FAIRSPLIT_INCOME_B";
/// Environment variable for the fixed costs.
pub const ENV_FIXED_COSTS: &str = "FAIRSPLIT_FIXED_COSTS";
/// Environment variable for output format.
pub const ENV_FORMAT: &str = "FAIRSPLIT_FORMAT";
/// Environment variable to disable colors.
pub const ENV_NO_COLOR: &str = "FAIRSPLIT_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "FAIRSPLIT_PRETTY";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "FAIRSPLIT_CONFIG";

// =============================================================================
// Config File
// =============================================================================

/// On-disk configuration, all fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub income_a: Option<f64>,
    pub income_b: Option<f64>,
    pub fixed_costs: Option<f64>,
    pub format: Option<String>,
    pub no_color: Option<bool>,
    pub pretty: Option<bool>,
}

impl Config {
    /// Load the config file at `path`.
    ///
    /// A missing file is only an error when the path was explicitly
    /// requested (`--config` / `FAIRSPLIT_CONFIG`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` for an explicitly requested missing file,
    /// `ConfigParse` for malformed TOML, or an I/O error.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                return Err(FairsplitError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    /// Parse config file contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| FairsplitError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources {
    pub income_a: ConfigSource,
    pub income_b: ConfigSource,
    pub fixed_costs: ConfigSource,
    pub format: ConfigSource,
    pub no_color: ConfigSource,
    pub pretty: ConfigSource,
}

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The split inputs to compute with.
    pub inputs: SplitInputs,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to disable colored output.
    pub no_color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Resolve the effective configuration for a command invocation.
///
/// # Errors
///
/// Returns a configuration error when the config file is missing (explicit
/// path only) or malformed, or when any surface supplies an invalid value.
pub fn resolve(cli: &Cli, input_args: Option<&InputArgs>) -> Result<ResolvedConfig> {
    let (path, required) = cli.config.as_ref().map_or_else(
        || (AppPaths::new().config_file(), false),
        |path| (path.clone(), true),
    );
    let file = Config::load(&path, required)?;

    let defaults = SplitInputs::default();
    let (income_a, income_a_src) = resolve_amount(
        "income-a",
        input_args.and_then(|args| args.income_a),
        env_string(ENV_INCOME_A),
        file.income_a,
        defaults.income_a,
    )?;
    let (income_b, income_b_src) = resolve_amount(
        "income-b",
        input_args.and_then(|args| args.income_b),
        env_string(ENV_INCOME_B),
        file.income_b,
        defaults.income_b,
    )?;
    let (fixed_costs, fixed_costs_src) = resolve_amount(
        "fixed-costs",
        input_args.and_then(|args| args.fixed_costs),
        env_string(ENV_FIXED_COSTS),
        file.fixed_costs,
        defaults.fixed_costs,
    )?;

    let (format, format_src) = resolve_format(cli, env_string(ENV_FORMAT), file.format.as_deref())?;
    let (no_color, no_color_src) = resolve_switch(
        cli.no_color,
        env_string(ENV_NO_COLOR)
            .or_else(|| env_string(ENV_NO_COLOR_STD))
            .is_some_and(|raw| is_truthy(&raw)),
        file.no_color,
    );
    let (pretty, pretty_src) = resolve_switch(
        cli.pretty,
        env_string(ENV_PRETTY).is_some_and(|raw| is_truthy(&raw)),
        file.pretty,
    );

    let resolved = ResolvedConfig {
        inputs: SplitInputs {
            income_a,
            income_b,
            fixed_costs,
        },
        format,
        no_color,
        pretty,
        sources: ConfigSources {
            income_a: income_a_src,
            income_b: income_b_src,
            fixed_costs: fixed_costs_src,
            format: format_src,
            no_color: no_color_src,
            pretty: pretty_src,
        },
    };
    tracing::debug!(?resolved.inputs, ?resolved.format, "configuration resolved");
    Ok(resolved)
}

fn resolve_amount(
    key: &str,
    cli_value: Option<f64>,
    env_raw: Option<String>,
    file_value: Option<f64>,
    default: f64,
) -> Result<(f64, ConfigSource)> {
    if let Some(value) = cli_value {
        validate_amount(key, value)?;
        return Ok((value, ConfigSource::Cli));
    }
    if let Some(raw) = env_raw {
        let value = raw
            .parse::<f64>()
            .map_err(|_| FairsplitError::ConfigInvalid {
                key: key.to_string(),
                value: raw.clone(),
                message: "not a number".to_string(),
            })?;
        validate_amount(key, value)?;
        return Ok((value, ConfigSource::Env));
    }
    if let Some(value) = file_value {
        validate_amount(key, value)?;
        return Ok((value, ConfigSource::ConfigFile));
    }
    Ok((default, ConfigSource::Default))
}

fn validate_amount(key: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FairsplitError::ConfigInvalid {
            key: key.to_string(),
            value: value.to_string(),
            message: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(FairsplitError::ConfigInvalid {
            key: key.to_string(),
            value: value.to_string(),
            message: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn resolve_format(
    cli: &Cli,
    env_raw: Option<String>,
    file_value: Option<&str>,
) -> Result<(OutputFormat, ConfigSource)> {
    // The --format default is Human, so a Human flag is indistinguishable
    // from "not passed" and falls through to env and file.
    if cli.json || cli.format != OutputFormat::Human {
        return Ok((cli.effective_format(), ConfigSource::Cli));
    }
    if let Some(raw) = env_raw {
        let format = OutputFormat::from_arg(&raw).ok_or_else(|| FairsplitError::ConfigInvalid {
            key: "format".to_string(),
            value: raw.clone(),
            message: "expected human, json, or md".to_string(),
        })?;
        return Ok((format, ConfigSource::Env));
    }
    if let Some(raw) = file_value {
        let format = OutputFormat::from_arg(raw).ok_or_else(|| FairsplitError::ConfigInvalid {
            key: "format".to_string(),
            value: raw.to_string(),
            message: "expected human, json, or md".to_string(),
        })?;
        return Ok((format, ConfigSource::ConfigFile));
    }
    Ok((OutputFormat::Human, ConfigSource::Default))
}

const fn resolve_switch(
    cli_flag: bool,
    env_set: bool,
    file_value: Option<bool>,
) -> (bool, ConfigSource) {
    if cli_flag {
        (true, ConfigSource::Cli)
    } else if env_set {
        (true, ConfigSource::Env)
    } else if let Some(value) = file_value {
        (value, ConfigSource::ConfigFile)
    } else {
        (false, ConfigSource::Default)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r#"
income-a = 1200.0
income-b = 800.0
fixed-costs = 430.5
format = "json"
no-color = true
pretty = true
"#,
            &test_path(),
        )
        .unwrap();

        assert_eq!(config.income_a, Some(1200.0));
        assert_eq!(config.income_b, Some(800.0));
        assert_eq!(config.fixed_costs, Some(430.5));
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.no_color, Some(true));
        assert_eq!(config.pretty, Some(true));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = Config::parse("", &test_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = Config::parse("income-a = ", &test_path()).unwrap_err();
        assert_eq!(err.error_code(), "FSPLIT-C002");
    }

    #[test]
    fn amount_precedence_is_cli_env_file_default() {
        let (value, source) =
            resolve_amount("income-a", Some(1.0), Some("2".to_string()), Some(3.0), 4.0).unwrap();
        assert_eq!((value, source), (1.0, ConfigSource::Cli));

        let (value, source) =
            resolve_amount("income-a", None, Some("2".to_string()), Some(3.0), 4.0).unwrap();
        assert_eq!((value, source), (2.0, ConfigSource::Env));

        let (value, source) = resolve_amount("income-a", None, None, Some(3.0), 4.0).unwrap();
        assert_eq!((value, source), (3.0, ConfigSource::ConfigFile));

        let (value, source) = resolve_amount("income-a", None, None, None, 4.0).unwrap();
        assert_eq!((value, source), (4.0, ConfigSource::Default));
    }

    #[test]
    fn non_numeric_env_amount_is_invalid() {
        let err = resolve_amount("income-a", None, Some("plenty".to_string()), None, 4.0)
            .unwrap_err();
        assert_eq!(err.error_code(), "FSPLIT-C003");
    }

    #[test]
    fn negative_and_non_finite_amounts_are_invalid() {
        assert!(validate_amount("income-a", -5.0).is_err());
        assert!(validate_amount("income-a", f64::NAN).is_err());
        assert!(validate_amount("income-a", f64::INFINITY).is_err());
        assert!(validate_amount("income-a", 0.0).is_ok());
    }

    #[test]
    fn switch_precedence() {
        assert_eq!(resolve_switch(true, true, Some(false)), (true, ConfigSource::Cli));
        assert_eq!(resolve_switch(false, true, Some(false)), (true, ConfigSource::Env));
        assert_eq!(
            resolve_switch(false, false, Some(true)),
            (true, ConfigSource::ConfigFile)
        );
        assert_eq!(
            resolve_switch(false, false, None),
            (false, ConfigSource::Default)
        );
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("no"));
    }
}
