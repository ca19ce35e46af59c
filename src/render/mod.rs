//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::core::models::SplitReport;
use crate::error::Result;

pub use error::render_error;

/// Render a split report in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_report(
    report: &SplitReport,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => human::render_report(report, no_color),
        OutputFormat::Json => robot::render_report_json(report, pretty),
        OutputFormat::Md => robot::render_report_md(report),
    }
}
