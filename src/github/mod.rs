//! GitHub API client module
//!
//! This module provides functionality to interact with the GitHub REST API
//! organization membership endpoints.

mod client;
mod credentials;
pub mod executor;
pub mod helpers;
pub mod members;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{parse_next_page, GhClient};
pub use credentials::TokenResolver;
pub use executor::{ApiResponse, Lookup, Query, RequestExecutor};
pub use helpers::{collect_org_results, fetch_from_organizations, log_completion, OrgListing};
pub use members::{
    run_check_command, run_conceal_command, run_list_command, run_publicize_command,
    run_remove_command, Member, MemberFilter, MemberOptions, MemberRole, OrgMembers,
};
