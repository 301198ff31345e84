// server/src/cli/mod.rs

// Command-line interface for the patient records system: argument parsing,
// the interactive login/menu loop and the handlers behind each menu entry.

pub mod cli;
pub mod handlers_audit;
pub mod handlers_patient;
pub mod handlers_records;
pub mod handlers_user;
pub mod handlers_utils;
pub mod interactive;

pub use cli::{run_command, start_cli, CliArgs, Commands};
