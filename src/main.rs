//! hrms CLI entry point
//!
//! Parses arguments and dispatches to the CLI module. Errors are printed
//! to stderr and the process exits non-zero.

use hrms::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
