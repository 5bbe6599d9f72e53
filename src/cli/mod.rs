//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod init;
mod show;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::builtin;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Output format for the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Human-readable listing
    Text,
    /// The JSON shape the build tool consumes
    Json,
}

/// Windcfg - Load, validate and emit Tailwind-style theme configuration
#[derive(Parser)]
#[command(name = "windcfg")]
#[command(about = "Windcfg - Load, validate and emit Tailwind-style theme configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a theme config file and report every violation
    Check {
        /// Config file (.toml, .json or .json5)
        file: PathBuf,

        /// Suppress per-violation output, set exit code only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the resolved configuration
    Show {
        /// Config file; when omitted, discovery runs and falls back to
        /// the built-in dark variant
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ShowFormat,
    },

    /// Write a starter theme.toml from a built-in variant
    Init {
        /// Directory to write into (default: current directory)
        dir: Option<PathBuf>,

        /// Built-in variant to start from
        #[arg(long, default_value = "dark")]
        theme: String,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List built-in theme variants
    Themes,
}

/// CLI entry point. Parses arguments and dispatches to command handlers.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, quiet } => check::run_check(&file, quiet),
        Commands::Show { file, format } => show::run_show(file.as_deref(), format),
        Commands::Init { dir, theme, force } => init::run_init(dir.as_deref(), &theme, force),
        Commands::Themes => {
            for name in builtin::list_builtins() {
                println!("{}", name);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}
