//! The `config` command: inspect resolved configuration.

use crate::cli::args::{Cli, ConfigCommand};
use crate::error::Result;
use crate::storage::config;
use crate::util::format::format_operand;

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns an error if configuration resolution fails.
pub fn execute(cmd: &ConfigCommand, cli: &Cli) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(cli),
    }
}

fn show(cli: &Cli) -> Result<()> {
    let resolved = config::resolve(cli, None)?;
    let sources = &resolved.sources;

    println!("{:<16} {:<12} {}", "Setting", "Value", "Source");
    println!("{:-<16} {:-<12} {:-<24}", "", "", "");
    println!(
        "{:<16} {:<12} {}",
        "income-a",
        format_operand(resolved.inputs.income_a),
        sources.income_a
    );
    println!(
        "{:<16} {:<12} {}",
        "income-b",
        format_operand(resolved.inputs.income_b),
        sources.income_b
    );
    println!(
        "{:<16} {:<12} {}",
        "fixed-costs",
        format_operand(resolved.inputs.fixed_costs),
        sources.fixed_costs
    );
    println!(
        "{:<16} {:<12} {}",
        "format",
        format!("{:?}", resolved.format).to_lowercase(),
        sources.format
    );
    println!(
        "{:<16} {:<12} {}",
        "no-color", resolved.no_color, sources.no_color
    );
    println!(
        "{:<16} {:<12} {}",
        "pretty", resolved.pretty, sources.pretty
    );

    Ok(())
}
