//! Core data models.
//!
//! The split pipeline is snapshot-shaped: inputs go in, a full report comes
//! out, and every field is re-derived on each change. Nothing here is cached
//! beyond the latest computed snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Inputs
// =============================================================================

/// The three numeric inputs to the split calculation.
///
/// Incomes (`income_a`, `income_b`) and the total fixed costs to divide.
/// Values are plain `f64`; non-finite values flow through the computation
/// rather than being rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitInputs {
    pub income_a: f64,
    pub income_b: f64,
    pub fixed_costs: f64,
}

impl Default for SplitInputs {
    fn default() -> Self {
        Self {
            income_a: 200.0,
            income_b: 500.0,
            fixed_costs: 150.0,
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// The derived split values.
///
/// # Fields
/// - `differential`: the damped income-imbalance factor.
/// - `fix_a`, `fix_b`: each party's share of the fixed costs. For every
///   input with a finite differential, `fix_a + fix_b` equals the fixed
///   costs within floating-point tolerance.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub differential: f64,
    pub fix_a: f64,
    pub fix_b: f64,
}

// =============================================================================
// Display Lines
// =============================================================================

/// One labeled line of the report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    pub label: String,
    /// Primary formatted value.
    pub value: String,
    /// Secondary percentage rendering, when the line carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
}

impl DisplayLine {
    /// Create a display line.
    #[must_use]
    pub fn new(label: &str, value: String, percent: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value,
            percent,
        }
    }

    /// Render the line with the label right-padded to `width` columns.
    #[must_use]
    pub fn render_padded(&self, width: usize) -> String {
        let mut text = format!("{:<width$}= {}", self.label, self.value);
        if let Some(percent) = &self.percent {
            text.push_str(" = ");
            text.push_str(percent);
        }
        text
    }
}

/// The textual formulas with operand values substituted.
///
/// Formatted independently of the display values: operands render raw and
/// the differential uses two significant digits.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Formulas {
    pub differential: String,
    pub fix_a: String,
    pub fix_b: String,
}

// =============================================================================
// Report
// =============================================================================

/// A complete split report: inputs, derived values, display lines, formulas.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub inputs: SplitInputs,
    pub result: SplitResult,
    pub lines: Vec<DisplayLine>,
    pub formulas: Formulas,
}

/// Robot-mode envelope around a report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotReport<'a> {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: &'a SplitReport,
}

impl<'a> RobotReport<'a> {
    /// Current robot output schema version.
    pub const SCHEMA_VERSION: u32 = 1;

    /// Wrap a report for robot output.
    #[must_use]
    pub fn new(report: &'a SplitReport) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION,
            generated_at: Utc::now(),
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs() {
        let inputs = SplitInputs::default();
        assert!((inputs.income_a - 200.0).abs() < f64::EPSILON);
        assert!((inputs.income_b - 500.0).abs() < f64::EPSILON);
        assert!((inputs.fixed_costs - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_line_padding() {
        let line = DisplayLine::new("FC/2", "75.00".to_string(), None);
        assert_eq!(line.render_padded(11), "FC/2       = 75.00");

        let line = DisplayLine::new("A2", "35.63".to_string(), Some("23.75%".to_string()));
        assert_eq!(line.render_padded(11), "A2         = 35.63 = 23.75%");
    }

    #[test]
    fn inputs_serialize_camel_case() {
        let json = serde_json::to_string(&SplitInputs::default()).unwrap();
        assert!(json.contains("incomeA"));
        assert!(json.contains("fixedCosts"));
    }
}
