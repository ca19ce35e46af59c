//! fairsplit - two-party fixed-cost splitting calculator.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use fairsplit::cli::{Cli, Commands};
use fairsplit::cli::args::SplitArgs;
use fairsplit::core::logging;
use fairsplit::storage::config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(|| logging::parse_log_level_from_env().map(logging::LogLevel::from_tracing_level))
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    let format = cli.effective_format();
    let no_color = cli.no_color;
    let pretty = cli.pretty;

    // Execute command
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            let error_output = fairsplit::render::render_error(&e, format, no_color, pretty);
            eprintln!("{error_output}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> fairsplit::Result<()> {
    match &cli.command {
        // Default to the split command with resolved configuration
        None => fairsplit::cli::split::execute(&SplitArgs::default(), cli),

        Some(Commands::Split(args)) => fairsplit::cli::split::execute(args, cli),

        Some(Commands::Tui(args)) => {
            let resolved = config::resolve(cli, Some(&args.inputs))?;
            fairsplit::tui::run_dashboard(resolved.inputs)
        }

        Some(Commands::Config(cmd)) => fairsplit::cli::config::execute(cmd, cli),

        Some(Commands::Completions(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "fairsplit", &mut std::io::stdout());
            Ok(())
        }
    }
}
