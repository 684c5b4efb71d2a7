//! CLI module for hrms
//!
//! Provides command-line interface for:
//! - serve: Connect to the store and serve the employee API
//! - check-config: Validate and print the effective configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
pub use io::write_json;
