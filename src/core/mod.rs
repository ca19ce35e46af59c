//! Core computation and report assembly.

pub mod logging;
pub mod models;
pub mod report;
pub mod split;

pub use models::{DisplayLine, Formulas, SplitInputs, SplitReport, SplitResult};
pub use report::{LABELS, build_report, label_width};
pub use split::compute;
