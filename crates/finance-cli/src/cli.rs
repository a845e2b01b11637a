use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use finance_core::VERSION;

/// Finance - a terminal-driven personal finance ledger
#[derive(Parser)]
#[command(name = "finance")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "FINANCE_CONFIG")]
    pub config: Option<String>,

    /// Currency for new accounts (overrides config)
    #[arg(long, global = true, value_name = "CODE")]
    pub currency: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (no menu banner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values accepted by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Stable `Label: value` lines
    Plain,
    /// Tables and badges
    Pretty,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Run,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
