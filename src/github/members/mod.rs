//! Organization members module - list, check and manage org members

mod api;
mod commands;
mod models;

pub use api::OrgMembers;
pub use commands::{
    run_check_command, run_conceal_command, run_list_command, run_publicize_command,
    run_remove_command,
};
pub use models::{Member, MemberFilter, MemberOptions, MemberRole};
