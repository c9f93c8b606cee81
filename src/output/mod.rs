//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON

mod common;
mod members;

pub use common::escape_csv;
pub use members::output_members;
