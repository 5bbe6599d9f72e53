//! Init command implementation
//!
//! Writes a starter `theme.toml` from a built-in variant.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::builtin;
use crate::config::loader::CONFIG_FILE_NAME;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the init command.
pub fn run_init(dir: Option<&Path>, theme: &str, force: bool) -> ExitCode {
    let Some(config) = builtin::get_builtin(theme) else {
        eprintln!(
            "Error: Unknown theme '{}'. Available: {}",
            theme,
            builtin::list_builtins().join(", ")
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    let dir = dir.unwrap_or_else(|| Path::new("."));
    let target = dir.join(CONFIG_FILE_NAME);

    if target.exists() && !force {
        eprintln!(
            "Error: '{}' already exists (use --force to overwrite)",
            target.display()
        );
        return ExitCode::from(EXIT_ERROR);
    }

    let toml = match toml::to_string_pretty(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: Cannot serialize theme '{}': {}", theme, e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error: Cannot create directory '{}': {}", parent.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = fs::write(&target, toml) {
        eprintln!("Error: Cannot write '{}': {}", target.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Wrote {} ({} theme)", target.display(), theme);
    ExitCode::from(EXIT_SUCCESS)
}
