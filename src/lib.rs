//! mkwords library crate
//!
//! This crate provides the core functionality for the `mkwords` CLI, which
//! writes a flat binary file of pseudo-random 4-byte words for use as a test
//! fixture. It is organized into small modules: `size` (argument validation),
//! `generate` (the write loop and file lifecycle), and `error` (the failure
//! taxonomy). The binary `src/main.rs` calls `mkwords_lib::run()`.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `execute()`: run an already-parsed [`Cli`] and report the outcome as a
//!   `Result`.

pub mod error;
pub mod generate;
pub mod size;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::Error;
use crate::generate::generate_file;
use crate::size::parse_size;

/// Command-line arguments. Keep `main.rs` thin.
///
/// Exactly two positionals and no flags: `--help` and `--version` are
/// disabled, and values starting with `-` are taken literally.
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Output file (created, or truncated if it exists)
    #[arg(allow_hyphen_values = true)]
    pub filename: PathBuf,

    /// Number of 4-byte words to write
    #[arg(value_parser = parse_size, allow_hyphen_values = true)]
    pub size: u64,
}

/// Generate the file described by `cli` using an entropy-seeded `SmallRng`.
///
/// Returns the number of bytes written.
pub fn execute(cli: &Cli) -> Result<u64, Error> {
    let mut rng = SmallRng::from_entropy();
    generate_file(&cli.filename, cli.size, &mut rng)
}

/// Run the mkwords CLI.
///
/// Argument errors (wrong count, invalid size) are reported by clap, which
/// prints usage and exits with status 2 before any file is touched. I/O
/// failures are printed as `Error: <cause>` and map to exit status 1. A
/// successful run prints nothing.
///
/// ```no_run
/// let code = mkwords_lib::run(); // called from src/main.rs
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
