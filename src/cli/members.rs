//! Member command arguments

use clap::Parser;

use super::OutputFormat;
use crate::config::api;
use crate::github::{MemberFilter, MemberOptions, MemberRole};

/// Arguments for 'list' subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Organization name(s), fetched in parallel
    #[arg(required = true)]
    pub orgs: Vec<String>,

    /// List only publicly visible members
    #[arg(long, default_value_t = false)]
    pub public: bool,

    /// Server-side member filter
    #[arg(short, long, value_enum)]
    pub filter: Option<MemberFilter>,

    /// Only members with this role
    #[arg(short, long, value_enum)]
    pub role: Option<MemberRole>,

    /// Page size requested from the API (max 100, default 100 with --all-pages)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: Option<u32>,

    /// Follow pagination and fetch every page
    #[arg(short, long, default_value_t = false)]
    pub all_pages: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl ListArgs {
    /// Options passed to the membership client
    pub fn options(&self) -> MemberOptions {
        let mut options = MemberOptions::new().with_public(self.public);
        if let Some(filter) = self.filter {
            options = options.filter(filter);
        }
        if let Some(role) = self.role {
            options = options.role(role);
        }
        let per_page = match self.per_page {
            Some(per_page) => Some(per_page),
            None if self.all_pages => Some(api::DEFAULT_PER_PAGE),
            None => None,
        };
        if let Some(per_page) = per_page {
            options = options.per_page(per_page);
        }
        options
    }
}

/// Organization and user a command acts on
#[derive(Parser, Debug)]
pub struct MemberTargetArgs {
    /// Organization name
    pub org: String,

    /// User login
    pub user: String,
}

/// Arguments for 'check' subcommand
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Organization name
    pub org: String,

    /// User login
    pub user: String,

    /// Check public membership only
    #[arg(long, default_value_t = false)]
    pub public: bool,
}

/// Arguments for destructive subcommands ('remove', 'conceal')
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub target: MemberTargetArgs,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
