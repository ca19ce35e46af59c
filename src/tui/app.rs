//! Application state and main event loop for the interactive dashboard.
//!
//! The dashboard is the live counterpart of the one-shot `split` command:
//! three editable input fields, and the full report rebuilt synchronously on
//! every edit. There is no async boundary and no dirty tracking; an input
//! event runs to completion before the next is processed.

use crate::core::models::{SplitInputs, SplitReport};
use crate::core::report::build_report;
use crate::error::{FairsplitError, Result};

use super::Tui;
use super::dashboard::Dashboard;
use super::event::{Event, EventHandler, KeyAction};

/// Number of input fields.
pub const FIELD_COUNT: usize = 3;

/// Input field labels, in focus order.
pub const FIELD_LABELS: [&str; FIELD_COUNT] = ["A1", "B1", "Fix Costs (FC)"];

/// Application state for the interactive dashboard.
pub struct App {
    /// Text buffers for the three input fields.
    buffers: [String; FIELD_COUNT],
    /// Currently focused field index.
    focused: usize,
    /// Starting values, restored on reset.
    initial: SplitInputs,
    /// Latest computed report snapshot.
    report: SplitReport,
    /// Whether to show help overlay.
    show_help: bool,
    /// Whether the app should quit.
    should_quit: bool,
}

impl App {
    /// Create a new application seeded with the given inputs.
    #[must_use]
    pub fn new(inputs: SplitInputs) -> Self {
        Self {
            buffers: buffers_for(inputs),
            focused: 0,
            initial: inputs,
            report: build_report(inputs),
            show_help: false,
            should_quit: false,
        }
    }

    /// Run the application event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or event handling fails.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let event_handler = EventHandler::new(100); // 100ms tick rate

        while !self.should_quit {
            terminal
                .draw(|frame| {
                    let dashboard =
                        Dashboard::new(&self.buffers, self.focused, &self.report, self.show_help);
                    frame.render_widget(dashboard, frame.area());
                })
                .map_err(FairsplitError::Io)?;

            match event_handler.next() {
                Ok(Event::Key(key)) => {
                    self.handle_action(KeyAction::from_key_event(key));
                }
                Ok(Event::Tick | Event::Resize(_, _)) => {
                    // Terminal will be redrawn on next iteration
                }
                Err(e) => {
                    // Log but don't crash on event errors
                    tracing::warn!("Event error: {e}");
                }
            }
        }

        Ok(())
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        // If help is shown, any key dismisses it
        if self.show_help && action != KeyAction::None {
            self.show_help = false;
            return;
        }

        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::NextField => {
                self.focused = (self.focused + 1) % FIELD_COUNT;
            }
            KeyAction::PrevField => {
                self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
            }
            KeyAction::Insert(c) => {
                if !c.is_control() {
                    self.buffers[self.focused].push(c);
                    self.recompute();
                }
            }
            KeyAction::Backspace => {
                self.buffers[self.focused].pop();
                self.recompute();
            }
            KeyAction::ClearField => {
                self.buffers[self.focused].clear();
                self.recompute();
            }
            KeyAction::Reset => {
                self.buffers = buffers_for(self.initial);
                self.focused = 0;
                self.recompute();
            }
            KeyAction::Help => {
                self.show_help = !self.show_help;
            }
            KeyAction::None => {}
        }
    }

    /// The latest report snapshot.
    #[must_use]
    pub const fn report(&self) -> &SplitReport {
        &self.report
    }

    /// The current input buffers.
    #[must_use]
    pub const fn buffers(&self) -> &[String; FIELD_COUNT] {
        &self.buffers
    }

    /// The focused field index.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// Whether the app has been asked to quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Reparse all buffers and rebuild the report snapshot.
    fn recompute(&mut self) {
        let inputs = SplitInputs {
            income_a: parse_field(&self.buffers[0]),
            income_b: parse_field(&self.buffers[1]),
            fixed_costs: parse_field(&self.buffers[2]),
        };
        self.report = build_report(inputs);
    }
}

/// Seed buffers from numeric inputs.
fn buffers_for(inputs: SplitInputs) -> [String; FIELD_COUNT] {
    use crate::util::format::format_operand;
    [
        format_operand(inputs.income_a),
        format_operand(inputs.income_b),
        format_operand(inputs.fixed_costs),
    ]
}

/// Parse a field buffer with leading-integer semantics.
///
/// Takes an optional sign and the longest run of leading digits; anything
/// else (empty field, stray text) is NaN, which flows through the
/// computation and shows up inline in the report.
fn parse_field(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.parse::<f64>().map_or(f64::NAN, |value| sign * value)
}
