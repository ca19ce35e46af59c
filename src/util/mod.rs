//! Utility functions.

pub mod env;
pub mod format;

pub use format::{FormatOptions, format_amount, format_operand, format_sig};
