//! fairsplit - two-party fixed-cost splitting calculator.
//!
//! Splits a shared fixed cost between two parties in proportion to their
//! incomes. A damped differential shifts the allocation away from an even
//! 50/50 split without letting extreme income gaps run the shares to an
//! implausible extreme. The result is rendered as seven labeled display
//! lines plus the formulas with operand values substituted, either once via
//! the CLI or live in the TUI.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;
pub mod tui;
pub mod util;

pub use error::{ExitCode, FairsplitError, Result};
