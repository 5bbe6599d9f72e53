//! Configuration schema types for theme config files
//!
//! Defines the record shape the consuming CSS build tool expects (`content`
//! globs, `theme.extend.colors`, optional `theme.fontFamily`, `plugins`)
//! and the structural validation rules for it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color;
use crate::content;

/// Color overrides merged on top of the build tool's defaults.
///
/// Maps semantic slot names (`bg`, `card`, `accent`, ...) to hex literals.
/// A `BTreeMap` keeps keys unique and serialization order stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtendSection {
    /// Color slot -> hex literal
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// The `theme` block: extensions plus optional font-stack overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeSection {
    /// Values merged into the tool's default theme
    #[serde(default)]
    pub extend: ExtendSection,
    /// Font role (`sans`, `mono`) -> ordered fallback list.
    /// Replaces the tool's default stacks when present.
    #[serde(rename = "fontFamily", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<BTreeMap<String, Vec<String>>>,
}

/// Complete theme configuration record.
///
/// Authored once, loaded once per build invocation, never mutated. The
/// serialized field names match the external tool's input shape exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Glob patterns selecting the files scanned for class names
    pub content: Vec<String>,
    /// Plugin identifiers; empty in both shipped variants.
    /// Declared before `theme` so TOML serialization emits the array
    /// before the tables.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Theme overrides
    #[serde(default)]
    pub theme: ThemeSection,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "theme.extend.colors.accent")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl ThemeConfig {
    /// Look up a color slot.
    ///
    /// Returns `None` for an absent slot; callers decide how to react.
    /// Absence is never papered over with a default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use windcfg::builtin;
    ///
    /// let cfg = builtin::get_builtin("dark").unwrap();
    /// assert_eq!(cfg.color("accent"), Some("#59C2FF"));
    /// assert_eq!(cfg.color("border"), None);
    /// ```
    pub fn color(&self, slot: &str) -> Option<&str> {
        self.theme.extend.colors.get(slot).map(String::as_str)
    }

    /// Look up a font role's fallback list.
    ///
    /// Returns `None` when the config carries no `fontFamily` block or the
    /// role is absent from it.
    pub fn font_family(&self, role: &str) -> Option<&[String]> {
        self.theme
            .font_family
            .as_ref()
            .and_then(|families| families.get(role))
            .map(Vec::as_slice)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.content.is_empty() {
            errors.push(ConfigValidationError {
                field: "content".to_string(),
                message: "must contain at least one glob pattern".to_string(),
            });
        }

        for (i, pattern) in self.content.iter().enumerate() {
            if let Err(e) = content::check_pattern(pattern) {
                errors.push(ConfigValidationError {
                    field: format!("content[{}]", i),
                    message: e.to_string(),
                });
            }
        }

        for (slot, value) in &self.theme.extend.colors {
            if let Err(e) = value.parse::<color::HexColor>() {
                errors.push(ConfigValidationError {
                    field: format!("theme.extend.colors.{}", slot),
                    message: e.to_string(),
                });
            }
        }

        if let Some(families) = &self.theme.font_family {
            for (role, stack) in families {
                if stack.is_empty() {
                    errors.push(ConfigValidationError {
                        field: format!("theme.fontFamily.{}", role),
                        message: "must list at least one font family".to_string(),
                    });
                }
                for (i, family) in stack.iter().enumerate() {
                    if family.is_empty() {
                        errors.push(ConfigValidationError {
                            field: format!("theme.fontFamily.{}[{}]", role, i),
                            message: "font family name must be non-empty".to_string(),
                        });
                    }
                }
            }
        }

        for (i, plugin) in self.plugins.iter().enumerate() {
            if plugin.is_empty() {
                errors.push(ConfigValidationError {
                    field: format!("plugins[{}]", i),
                    message: "plugin identifier must be non-empty".to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
