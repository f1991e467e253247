//! CLI module for persistgen
//!
//! This module provides the command-line host: it reads a JSON model, runs a generation pass and writes or
//! prints the generated units.
//!
//! ## Commands
//!
//! - `generate <MODEL> [OUTPUT_DIR]` - Generate and write one file per class
//! - `check <MODEL>` - Generate in memory and report diagnostics only
//! - `--emit <MODEL>` - Print generated units to stdout (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::backend::GeneratorConfig;
use crate::version::PERSISTGEN_VERSION;

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
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Managed-entity code generator
#[derive(Parser, Debug)]
#[command(name = "persistgen")]
#[command(version = PERSISTGEN_VERSION)]
#[command(about = "Generate accessors, audit/soft-delete bookkeeping and authority mappers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print generated code for every class (debug)
    #[arg(long = "emit", value_name = "MODEL")]
    pub emit_model: Option<PathBuf>,

    #[command(flatten)]
    pub options: GenerateOptions,
}

/// Options shared by every command that runs a pass.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Path generated code uses for runtime items
    #[arg(long = "runtime-path", value_name = "PATH", global = true)]
    pub runtime_path: Option<String>,

    /// Fail classes not declared at namespace scope instead of skipping them
    #[arg(long = "strict-structure", global = true)]
    pub strict_structure: bool,
}

impl GenerateOptions {
    pub fn to_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new().with_strict_structure(self.strict_structure);
        match &self.runtime_path {
            Some(path) => config.with_runtime_path(path.clone()),
            None => config,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one file per class
    Generate {
        /// JSON model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Output directory (default: generated)
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Run a pass and report diagnostics without writing
    Check {
        /// JSON model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.options.to_config();

    if let Some(model) = cli.emit_model {
        return commands::emit(&model, config);
    }

    match cli.command {
        Some(Command::Generate { model, output_dir }) => commands::generate(&model, output_dir.as_deref(), config),
        Some(Command::Check { model }) => commands::check(&model, config),
        None => Err(CliError::failure("Error: no command given (try --help)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["persistgen", "generate", "model.json", "out"]).unwrap();
        if let Some(Command::Generate { model, output_dir }) = cli.command {
            assert_eq!(model, PathBuf::from("model.json"));
            assert_eq!(output_dir, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "persistgen",
            "generate",
            "model.json",
            "--runtime-path",
            "crate::rt",
            "--strict-structure",
        ])
        .unwrap();
        let config = cli.options.to_config();
        assert_eq!(config.runtime_path, "crate::rt");
        assert!(config.strict_structure);
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["persistgen", "check", "model.json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { .. })));
        assert_eq!(cli.options.to_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["persistgen", "--emit", "model.json"]).unwrap();
        assert_eq!(cli.emit_model, Some(PathBuf::from("model.json")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_no_command_is_error() {
        let cli = Cli::try_parse_from(["persistgen"]).unwrap();
        assert!(execute(cli).is_err());
    }
}
