//! Human-readable output using rich_rust.
//!
//! Renders the report as a styled panel: the seven aligned display lines
//! with the two share lines highlighted, followed by the formulas in dim
//! text.

use crate::core::models::SplitReport;
use crate::core::report::label_width;
use crate::error::Result;
use crate::util::format::format_operand;
use rich_rust::prelude::*;
use rich_rust::{Color, ColorSystem, Segment, Style};

/// Panel width for the report.
const PANEL_WIDTH: usize = 60;

/// Convert segments to a styled string with ANSI codes.
pub(crate) fn segments_to_string(segments: &[Segment], no_color: bool) -> String {
    let color_system = if no_color {
        ColorSystem::Standard // Will be ignored since styles won't render
    } else {
        ColorSystem::TrueColor
    };

    segments
        .iter()
        .map(|seg| {
            if no_color || seg.style.is_none() {
                seg.text.to_string()
            } else {
                seg.style.as_ref().unwrap().render(&seg.text, color_system)
            }
        })
        .collect()
}

/// Render the report for human consumption.
///
/// # Errors
///
/// Infallible in practice; returns `Result` to match the render dispatch.
pub fn render_report(report: &SplitReport, no_color: bool) -> Result<String> {
    let width = label_width();
    let mut content_lines: Vec<Vec<Segment>> = Vec::new();

    for line in &report.lines {
        let text = line.render_padded(width);
        // The two share lines are what people came for.
        let highlighted = matches!(line.label.as_str(), "A2" | "B2");
        let segment = if highlighted && !no_color {
            Segment::styled(
                text,
                Style::new().bold().color(Color::parse("green").unwrap()),
            )
        } else {
            Segment::plain(text)
        };
        content_lines.push(vec![segment]);
    }

    content_lines.push(vec![Segment::plain(String::new())]);
    for (label, formula) in [
        ("diff", &report.formulas.differential),
        ("A2", &report.formulas.fix_a),
        ("B2", &report.formulas.fix_b),
    ] {
        let text = format!("{label}: {formula}");
        let segment = if no_color {
            Segment::plain(text)
        } else {
            Segment::styled(text, Style::new().dim())
        };
        content_lines.push(vec![segment]);
    }

    let title_text = format!(
        "fairsplit (A1 {}, B1 {}, FC {})",
        format_operand(report.inputs.income_a),
        format_operand(report.inputs.income_b),
        format_operand(report.inputs.fixed_costs),
    );
    let title = if no_color {
        Text::new(&title_text)
    } else {
        let style = Style::new().bold().color(Color::parse("cyan").unwrap());
        Text::styled(&title_text, style)
    };

    let mut panel = Panel::new(content_lines).title(title).padding((0, 1));
    if !no_color {
        panel = panel.border_style(Style::new().color(Color::parse("blue").unwrap()));
    }

    let segments = panel.render(PANEL_WIDTH);
    Ok(segments_to_string(&segments, no_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SplitInputs;
    use crate::core::report::build_report;

    #[test]
    fn plain_output_contains_aligned_lines() {
        let report = build_report(SplitInputs::default());
        let output = render_report(&report, true).unwrap();

        assert!(output.contains("A2         = 35.63 = 23.75%"));
        assert!(output.contains("B2         = 114.38 = 76.25%"));
        assert!(output.contains("(200 / 500 - 500 / 200) * 0.25"));
        assert!(!output.contains('\x1b'), "no_color output had ANSI codes");
    }

    #[test]
    fn title_carries_the_inputs() {
        let report = build_report(SplitInputs::default());
        let output = render_report(&report, true).unwrap();
        assert!(output.contains("A1 200"));
        assert!(output.contains("FC 150"));
    }
}
