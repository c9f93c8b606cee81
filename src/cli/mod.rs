//! CLI argument parsing

mod members;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{api, defaults};

pub use members::{CheckArgs, ListArgs, MemberTargetArgs, RemoveArgs};

/// GitHub organization membership CLI
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version)]
#[command(about = "List, check and manage GitHub organization members", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API token (overrides GH_TOKEN and GITHUB_TOKEN)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// API root URL (GitHub Enterprise Server: https://HOST/api/v3)
    #[arg(long, global = true, env = defaults::API_URL_ENV, default_value = api::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List organization members
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Check whether a user is a member of an organization
    Check(CheckArgs),

    /// Remove a user from an organization
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Make a user's membership public
    Publicize(MemberTargetArgs),

    /// Conceal a user's membership
    Conceal(RemoveArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
