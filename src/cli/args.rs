//! CLI argument definitions using clap
//!
//! Commands:
//! - hrms serve [--config <path>] [--memory]
//! - hrms check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HRMS - employee records over HTTP
#[derive(Parser, Debug)]
#[command(name = "hrms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the store and serve the employee API
    Serve {
        /// Path to a JSON configuration file (built-in defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use an in-process store instead of MongoDB
        #[arg(long)]
        memory: bool,
    },

    /// Load and validate configuration, then print the effective values
    CheckConfig {
        /// Path to a JSON configuration file (built-in defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
