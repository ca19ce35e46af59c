//! Robot-mode output (JSON and Markdown).
//!
//! Provides stable, token-efficient output for scripts and AI agents. The
//! JSON payload carries a schema version; note that non-finite numeric
//! fields serialize as `null` while the formatted string fields keep their
//! `NaN`/`Infinity` spellings.

use crate::core::models::{RobotReport, SplitReport};
use crate::error::Result;
use crate::util::format::format_operand;

/// Render any serializable output as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json<T: serde::Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string(output)?)
}

/// Render any serializable output as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json_pretty<T: serde::Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Render the report as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_report_json(report: &SplitReport, pretty: bool) -> Result<String> {
    let output = RobotReport::new(report);

    if pretty {
        render_json_pretty(&output)
    } else {
        render_json(&output)
    }
}

/// Render the report as Markdown.
///
/// # Errors
///
/// Infallible in practice; returns `Result` to match the render dispatch.
pub fn render_report_md(report: &SplitReport) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "## fairsplit (A1 {}, B1 {}, FC {})\n",
        format_operand(report.inputs.income_a),
        format_operand(report.inputs.income_b),
        format_operand(report.inputs.fixed_costs),
    ));

    for line in &report.lines {
        match &line.percent {
            Some(percent) => {
                output.push_str(&format!("- {}: {} = {}\n", line.label, line.value, percent));
            }
            None => {
                output.push_str(&format!("- {}: {}\n", line.label, line.value));
            }
        }
    }

    output.push_str(&format!("- diff formula: {}\n", report.formulas.differential));
    output.push_str(&format!("- A2 formula: {}\n", report.formulas.fix_a));
    output.push_str(&format!("- B2 formula: {}\n", report.formulas.fix_b));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SplitInputs;
    use crate::core::report::build_report;

    #[test]
    fn json_output_carries_schema_and_lines() {
        let report = build_report(SplitInputs::default());
        let json = render_report_json(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["schemaVersion"], 1);
        assert!(value["generatedAt"].is_string());
        assert_eq!(value["inputs"]["incomeA"], 200.0);
        assert_eq!(value["lines"].as_array().unwrap().len(), 7);
        assert_eq!(value["lines"][1]["label"], "A2");
        assert_eq!(value["lines"][1]["value"], "35.63");
        assert_eq!(value["formulas"]["fixA"], "150 / 2 + (150 / 2) * -0.53");
    }

    #[test]
    fn non_finite_results_serialize_as_null() {
        let report = build_report(SplitInputs {
            income_a: 100.0,
            income_b: 0.0,
            fixed_costs: 100.0,
        });
        let json = render_report_json(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["result"]["differential"].is_null());
        assert_eq!(value["lines"][1]["value"], "Infinity");
    }

    #[test]
    fn markdown_output_lists_every_line() {
        let report = build_report(SplitInputs::default());
        let md = render_report_md(&report).unwrap();

        assert!(md.starts_with("## fairsplit (A1 200, B1 500, FC 150)"));
        assert!(md.contains("- FC/2: 75.00\n"));
        assert!(md.contains("- A2: 35.63 = 23.75%\n"));
        assert!(md.contains("- B2 / B1: 22.88%\n"));
        assert!(md.contains("- diff formula: (200 / 500 - 500 / 200) * 0.25\n"));
    }
}
