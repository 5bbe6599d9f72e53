//! Windcfg - Library for Tailwind-style theme configuration
//!
//! This library provides functionality to:
//! - Model the theme config record a CSS utility-class build tool consumes
//! - Load it from TOML or JSON5, with file discovery
//! - Validate content globs, hex palettes and font stacks
//! - Ship the project's built-in dark/light variants

pub mod builtin;
pub mod cli;
pub mod color;
pub mod config;
pub mod content;
