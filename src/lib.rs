//! ghorg - Explore and manage GitHub organization members
//!
//! A CLI and client library over the GitHub REST API organization
//! membership endpoints.
//!
//! # Features
//!
//! - List members (all or public only) of one or more organizations
//! - Check, remove, publicize and conceal memberships
//! - Lazy pagination through `Link` headers
//! - Multiple output formats (table, CSV, JSON)
//!
//! # Example
//!
//! ```bash
//! # List members of an organization
//! ghorg list acme-corp
//!
//! # Public members only, as JSON
//! ghorg list acme-corp --public -o json
//!
//! # Exit status tells whether alice is a member
//! ghorg check acme-corp alice
//!
//! # Remove a member without prompting
//! ghorg rm acme-corp alice -y
//! ```
//!
//! # Library usage
//!
//! ```no_run
//! use ghorg::{GhClient, MemberOptions};
//!
//! # async fn demo() -> ghorg::Result<()> {
//! let client = GhClient::new(None, "https://api.github.com");
//! let members = client
//!     .members()
//!     .list("rust-lang", &MemberOptions::public())
//!     .await?;
//! println!("{} public members", members.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod ui;

pub use cli::{
    CheckArgs, Cli, Command, ListArgs, MemberTargetArgs, OutputFormat, RemoveArgs,
};
pub use error::{GhError, Result};
pub use github::{
    run_check_command, run_conceal_command, run_list_command, run_publicize_command,
    run_remove_command, ApiResponse, GhClient, Lookup, Member, MemberFilter, MemberOptions,
    MemberRole, OrgMembers, RequestExecutor, TokenResolver,
};
pub use output::output_members;
