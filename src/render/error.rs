//! Error rendering for the CLI surface.

use crate::cli::args::OutputFormat;
use crate::error::FairsplitError;
use rich_rust::{Color, Segment, Style};

use super::human::segments_to_string;

/// Render an error for stderr in the requested output format.
#[must_use]
pub fn render_error(
    err: &FairsplitError,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Json => render_error_json(err, pretty),
        OutputFormat::Human | OutputFormat::Md => render_error_human(err, no_color),
    }
}

fn render_error_human(err: &FairsplitError, no_color: bool) -> String {
    let prefix = format!("error[{}]", err.error_code());
    let segments = vec![
        if no_color {
            Segment::plain(prefix)
        } else {
            Segment::styled(
                prefix,
                Style::new().bold().color(Color::parse("red").unwrap()),
            )
        },
        Segment::plain(format!(": {err}")),
    ];
    segments_to_string(&segments, no_color)
}

fn render_error_json(err: &FairsplitError, pretty: bool) -> String {
    let value = serde_json::json!({
        "error": {
            "code": err.error_code(),
            "category": err.category().description(),
            "message": err.to_string(),
        }
    });

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.unwrap_or_else(|_| err.to_string())
}
