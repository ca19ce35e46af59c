//! Interactive dashboard module using ratatui.
//!
//! The live surface of the calculator: edit the three inputs, watch all
//! seven report lines recompute on every keystroke.

mod app;
mod dashboard;
mod event;

pub use app::App;
pub use dashboard::Dashboard;
pub use event::{Event, EventHandler, KeyAction};

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::core::models::SplitInputs;
use crate::error::{FairsplitError, Result};

/// Terminal type alias for the TUI backend.
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// # Errors
///
/// Returns an error if terminal initialization fails.
pub fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
///
/// # Errors
///
/// Returns an error if terminal restoration fails.
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive dashboard.
///
/// # Errors
///
/// Returns an error if the dashboard fails to run.
pub fn run_dashboard(inputs: SplitInputs) -> Result<()> {
    let mut terminal = init_terminal().map_err(FairsplitError::Io)?;

    let app_result = App::new(inputs).run(&mut terminal);

    // Always try to restore terminal, even if app failed
    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Failed to restore terminal: {e}");
    }

    app_result
}
