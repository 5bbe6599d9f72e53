//! Show command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::loader::load_config;
use crate::config::schema::ThemeConfig;

use super::{ShowFormat, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command - print the resolved configuration.
pub fn run_show(file: Option<&Path>, format: ShowFormat) -> ExitCode {
    let config = match load_config(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match format {
        ShowFormat::Text => print_text(&config),
        ShowFormat::Json => match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Cannot serialize config: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn print_text(config: &ThemeConfig) {
    println!("content:");
    for pattern in &config.content {
        println!("  {}", pattern);
    }

    if !config.theme.extend.colors.is_empty() {
        println!("colors:");
        for (slot, value) in &config.theme.extend.colors {
            println!("  {:<8} {}", slot, value);
        }
    }

    if let Some(families) = &config.theme.font_family {
        println!("fontFamily:");
        for (role, stack) in families {
            println!("  {:<8} {}", role, stack.join(", "));
        }
    }

    if config.plugins.is_empty() {
        println!("plugins: (none)");
    } else {
        println!("plugins:");
        for plugin in &config.plugins {
            println!("  {}", plugin);
        }
    }
}
