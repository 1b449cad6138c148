//! CLI module for the bundle inspector
//!
//! Usage: `testprobe <BUNDLE_PATH> <OUTPUT_PATH>`
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits; any
//! argument error (including a wrong argument count) prints clap's usage
//! text and exits 1, and any other failure prints `error: <description>`
//! and exits 1.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Test bundle inspector
#[derive(Parser, Debug)]
#[command(name = "testprobe")]
#[command(version = VERSION)]
#[command(about = "Lists the test classes and methods in a compiled test bundle", long_about = None)]
pub struct Cli {
    /// Path to the test bundle (library file or bundle directory)
    #[arg(value_name = "BUNDLE_PATH")]
    pub bundle_path: PathBuf,

    /// File to write the JSON report into
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The command
/// implementation returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help/--version land here too; only real argument errors
            // are failures.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            process::exit(code.0);
        }
    };

    if let Err(e) = commands::inspect(&cli.bundle_path, &cli.output_path) {
        if !e.message.is_empty() {
            eprintln!("{}", e.message);
        }
        process::exit(e.exit_code.0);
    }
}

// ============================================================================
// Tests
// ============================================================================
