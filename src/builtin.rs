//! Built-in theme variants.
//!
//! The two configurations the project ships: a dark theme matching the
//! production site and a light sibling that also overrides the default
//! font stacks. There is deliberately no automatic selection between
//! them; callers pick a variant by name.

use std::collections::BTreeMap;

use crate::config::schema::{ExtendSection, ThemeConfig, ThemeSection};

/// List of all available built-in theme names.
const BUILTIN_NAMES: &[&str] = &["dark", "light"];

/// Returns a list of all available built-in theme names.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}

/// Returns a built-in theme by name, or None if not found.
pub fn get_builtin(name: &str) -> Option<ThemeConfig> {
    match name {
        "dark" => Some(dark()),
        "light" => Some(light()),
        _ => None,
    }
}

fn content_globs() -> Vec<String> {
    vec!["./**/*.{html,hbs}".to_string()]
}

/// Dark theme used by the production site.
pub fn dark() -> ThemeConfig {
    ThemeConfig {
        content: content_globs(),
        theme: ThemeSection {
            extend: ExtendSection {
                colors: BTreeMap::from([
                    ("bg".to_string(), "#0B0E14".to_string()),
                    ("card".to_string(), "#0F131A".to_string()),
                    ("accent".to_string(), "#59C2FF".to_string()),
                    ("accent2".to_string(), "#FFB454".to_string()),
                    ("link".to_string(), "#7FD962".to_string()),
                ]),
            },
            font_family: None,
        },
        plugins: Vec::new(),
    }
}

/// Light counterpart palette, with explicit font stacks.
pub fn light() -> ThemeConfig {
    ThemeConfig {
        content: content_globs(),
        theme: ThemeSection {
            extend: ExtendSection {
                colors: BTreeMap::from([
                    ("bg".to_string(), "#FCFCFC".to_string()),
                    ("card".to_string(), "#F3F4F5".to_string()),
                    ("accent".to_string(), "#399EE6".to_string()),
                    ("accent2".to_string(), "#F2AE49".to_string()),
                    ("link".to_string(), "#86B300".to_string()),
                ]),
            },
            font_family: Some(BTreeMap::from([
                (
                    "sans".to_string(),
                    vec![
                        "Inter".to_string(),
                        "ui-sans-serif".to_string(),
                        "system-ui".to_string(),
                        "sans-serif".to_string(),
                    ],
                ),
                (
                    "mono".to_string(),
                    vec![
                        "JetBrains Mono".to_string(),
                        "ui-monospace".to_string(),
                        "SFMono-Regular".to_string(),
                        "monospace".to_string(),
                    ],
                ),
            ])),
        },
        plugins: Vec::new(),
    }
}
