//! Dashboard widget for the interactive calculator.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::models::SplitReport;
use crate::core::report::label_width;

use super::app::{FIELD_COUNT, FIELD_LABELS};

/// The main dashboard layout.
pub struct Dashboard<'a> {
    /// Input field text buffers.
    buffers: &'a [String; FIELD_COUNT],
    /// Currently focused field index.
    focused: usize,
    /// Latest report snapshot.
    report: &'a SplitReport,
    /// Show help overlay.
    show_help: bool,
}

impl<'a> Dashboard<'a> {
    /// Create a new dashboard.
    #[must_use]
    pub const fn new(
        buffers: &'a [String; FIELD_COUNT],
        focused: usize,
        report: &'a SplitReport,
        show_help: bool,
    ) -> Self {
        Self {
            buffers,
            focused,
            report,
            show_help,
        }
    }

    /// Render the header.
    fn render_header(area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let title = Line::from(vec![
            Span::styled(
                " fairsplit ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("                                 "),
            Span::styled("[F1] Help  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Ctrl-R] Reset  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc] Quit", Style::default().fg(Color::DarkGray)),
        ]);

        let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
        header.render(area, buf);
    }

    /// Render the three input fields.
    fn render_inputs(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let constraints: Vec<Constraint> =
            (0..FIELD_COUNT).map(|_| Constraint::Length(3)).collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, chunk) in chunks.iter().enumerate() {
            let is_focused = i == self.focused;
            let border_style = if is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut spans = vec![Span::raw(self.buffers[i].clone())];
            if is_focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
            }

            let field = Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .title(format!(" {} ", FIELD_LABELS[i]))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            field.render(*chunk, buf);
        }
    }

    /// Render the report panel.
    fn render_report(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let width = label_width();
        let mut lines: Vec<Line> = Vec::new();

        for line in &self.report.lines {
            let text = line.render_padded(width);
            let styled = if matches!(line.label.as_str(), "A2" | "B2") {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(text))
            };
            lines.push(styled);
        }

        lines.push(Line::from(""));
        for (label, formula) in [
            ("diff", &self.report.formulas.differential),
            ("A2", &self.report.formulas.fix_a),
            ("B2", &self.report.formulas.fix_b),
        ] {
            lines.push(Line::from(Span::styled(
                format!("{label}: {formula}"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::default()
            .title(" Report ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let paragraph = Paragraph::new(lines).block(block);
        paragraph.render(area, buf);
    }

    /// Render the footer.
    fn render_footer(area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let footer = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Type to edit    Tab next field    Ctrl-U clear field",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let paragraph = Paragraph::new(footer);
        paragraph.render(area, buf);
    }

    /// Render the help overlay.
    fn render_help(area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  fairsplit - Terms",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  A1 = Available funds for A"),
            Line::from("  B1 = Available funds for B"),
            Line::from("  Fix Costs (FC) = Total costs"),
            Line::from("  50/50 = Total Fix Costs divided by 2"),
            Line::from("  A2 = Pro rata cost of A"),
            Line::from("  B2 = Pro rata cost of B"),
            Line::from("  Abs. Diff = Total difference between pro ratas"),
            Line::from("  Diff = Actual difference between pro ratas"),
            Line::from("  A2 / A1 = Percentage A1 of A2"),
            Line::from("  B2 / B1 = Percentage B1 of B2"),
            Line::from(""),
            Line::from(Span::styled(
                "  Press any key to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        // Center the help box
        let help_width = 54;
        let help_height = 17;
        let x = area.x + (area.width.saturating_sub(help_width)) / 2;
        let y = area.y + (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let paragraph = Paragraph::new(help_text).block(block);
        paragraph.render(help_area, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        // Main layout: header, inputs, report, footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1),                       // Header
                Constraint::Length(3 * FIELD_COUNT as u16), // Input fields
                Constraint::Min(13),                         // Report
                Constraint::Length(1),                       // Footer
            ])
            .split(area);

        Self::render_header(chunks[0], buf);
        self.render_inputs(chunks[1], buf);
        self.render_report(chunks[2], buf);
        Self::render_footer(chunks[3], buf);

        if self.show_help {
            Self::render_help(area, buf);
        }
    }
}
