//! Check command implementation

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::config::loader::parse_config;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the check command - validate a config file and list violations.
///
/// Parses without the loader's validation step so every structural
/// violation can be listed instead of stopping at the first failed load.
pub fn run_check(file: &Path, quiet: bool) -> ExitCode {
    let contents = match fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: Cannot read config file '{}': {}", file.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let config = match parse_config(file, &contents) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let errors = config.validate();
    if errors.is_empty() {
        if !quiet {
            println!("{}: OK", file.display());
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    if !quiet {
        eprintln!("{}: {} violation(s)", file.display(), errors.len());
        for error in &errors {
            eprintln!("  - {}", error);
        }
    }
    ExitCode::from(EXIT_ERROR)
}
