//! Windcfg - Command-line tool for theme configuration files

use std::process::ExitCode;

use windcfg::cli;

fn main() -> ExitCode {
    cli::run()
}
