//! Event handling for the interactive dashboard.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

/// TUI events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal tick event for refresh.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Event handler for the TUI.
pub struct EventHandler {
    /// Tick rate in milliseconds.
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event with timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if event polling fails.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                CrosstermEvent::Mouse(_)
                | CrosstermEvent::FocusGained
                | CrosstermEvent::FocusLost
                | CrosstermEvent::Paste(_) => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

/// Key action resulting from a key press.
///
/// Printable characters feed the focused input field; quitting and field
/// management live on control keys so that text entry keeps the whole
/// printable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application.
    Quit,
    /// Focus the next input field.
    NextField,
    /// Focus the previous input field.
    PrevField,
    /// Append a character to the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Clear the focused field.
    ClearField,
    /// Reset all fields to their starting values.
    Reset,
    /// Toggle help.
    Help,
    /// No action.
    None,
}

impl KeyAction {
    /// Parse a key event into an action.
    #[must_use]
    pub const fn from_key_event(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => Self::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::ClearField,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Reset,
            KeyCode::Tab | KeyCode::Enter | KeyCode::Down => Self::NextField,
            KeyCode::BackTab | KeyCode::Up => Self::PrevField,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::F(1) => Self::Help,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Self::Insert(c),
            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_keys_map_to_actions() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            KeyAction::NextField
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            KeyAction::ClearField
        );
    }

    #[test]
    fn printable_characters_insert() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('7'), KeyModifiers::NONE)),
            KeyAction::Insert('7')
        );
        // Non-numeric entry still inserts; the parser turns it into NaN.
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            KeyAction::Insert('x')
        );
    }
}
