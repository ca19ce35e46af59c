//! The `split` command: resolve inputs, compute once, print the report.

use crate::cli::args::{Cli, SplitArgs};
use crate::core::report::build_report;
use crate::error::Result;
use crate::render;
use crate::storage::config;
use crate::util::env::should_use_color;

/// Execute the split command.
///
/// # Errors
///
/// Returns an error if configuration resolution or rendering fails.
pub fn execute(args: &SplitArgs, cli: &Cli) -> Result<()> {
    let resolved = config::resolve(cli, Some(&args.inputs))?;
    let no_color = resolved.no_color || !should_use_color(resolved.no_color);

    let report = build_report(resolved.inputs);
    let output = render::render_report(&report, resolved.format, resolved.pretty, no_color)?;
    println!("{output}");
    Ok(())
}
