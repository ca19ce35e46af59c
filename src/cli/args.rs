//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Two-party fixed-cost splitting calculator.
#[derive(Parser, Debug)]
#[command(name = "fairsplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "FAIRSPLIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the split and print the report (default command)
    Split(SplitArgs),

    /// Interactive dashboard with live recomputation
    Tui(TuiArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled panel output for people
    #[default]
    Human,
    /// JSON for scripts and agents
    Json,
    /// Markdown
    Md,
}

impl OutputFormat {
    /// Parse from a config or env string (case-insensitive).
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Md),
            _ => None,
        }
    }
}

/// The three split inputs as optional CLI overrides.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct InputArgs {
    /// Income for party A
    #[arg(long, value_name = "AMOUNT")]
    pub income_a: Option<f64>,

    /// Income for party B
    #[arg(long, value_name = "AMOUNT")]
    pub income_b: Option<f64>,

    /// Total fixed costs to split
    #[arg(long, short = 'f', value_name = "AMOUNT")]
    pub fixed_costs: Option<f64>,
}

/// Arguments for the `split` command.
#[derive(Parser, Debug, Clone, Copy, Default)]
pub struct SplitArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Arguments for the `tui` command.
#[derive(Parser, Debug, Clone, Copy, Default)]
pub struct TuiArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show resolved configuration and where each value came from
    Show,
}

/// Arguments for the `completions` command.
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
