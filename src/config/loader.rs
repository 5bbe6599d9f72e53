//! Configuration loading and discovery
//!
//! Provides functions to find and load theme config files. The canonical
//! on-disk form is `theme.toml`; the JSON5 object-literal shape the CSS
//! build tool itself consumes (`.json` / `.json5`) is accepted as well.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::schema::ThemeConfig;
use crate::builtin;

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "theme.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse theme config: {0}")]
    ParseToml(#[from] toml::de::Error),
    /// JSON5 parsing error
    #[error("Failed to parse theme config: {0}")]
    ParseJson5(#[from] json5::Error),
    /// Extension is neither toml nor json/json5
    #[error("Unsupported config extension '{0}', expected .toml, .json or .json5")]
    UnsupportedExtension(String),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find the config file by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for `theme.toml`
/// 2. Check `XDG_CONFIG_HOME/windcfg/theme.toml` (or `~/.config/windcfg/theme.toml`)
///
/// # Returns
/// - `Some(path)` if a config file is found
/// - `None` if no config file is found
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find the config file in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("windcfg").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find the config file by walking up from a specific directory.
///
/// This is the internal implementation that allows specifying the start
/// directory, useful for testing.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a theme config file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// `find_config()` to locate one. If no config file is found, returns the
/// built-in dark variant. Loaded configs are validated; a config that
/// parses but violates the structural rules is an error.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, has an unsupported
/// extension, fails to parse, or fails validation.
pub fn load_config(path: Option<&Path>) -> Result<ThemeConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(builtin::dark()),
    }
}

/// Load configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<ThemeConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(path, &contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(
            errors.into_iter().map(|e| e.to_string()).collect(),
        ));
    }

    Ok(config)
}

/// Parse config text, dispatching on the file extension.
///
/// Performs no structural validation; `load_config_file` layers that on
/// top. Exposed so callers that want to report every violation (rather
/// than fail the load) can parse first and call `validate` themselves.
pub fn parse_config(path: &Path, contents: &str) -> Result<ThemeConfig, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => Ok(toml::from_str(contents)?),
        "json" | "json5" => Ok(json5::from_str(contents)?),
        other => Err(ConfigError::UnsupportedExtension(other.to_string())),
    }
}

/// Get the project root directory from a config file path.
///
/// Returns the parent directory of the config file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    const VALID_TOML: &[u8] = br##"
content = ["./**/*.{html,hbs}"]

[theme.extend.colors]
bg = "#0B0E14"
accent = "#59C2FF"
"##;

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(VALID_TOML)
            .expect("should write config content");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(VALID_TOML)
            .expect("should write config content");

        let subdir = temp.path().join("templates").join("partials");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(VALID_TOML)
            .expect("should write config content");

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.content, vec!["./**/*.{html,hbs}"]);
        assert_eq!(config.color("accent"), Some("#59C2FF"));
    }

    #[test]
    fn test_load_config_from_json5() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("theme.json5");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(
                br#"{
  content: ["./**/*.{html,hbs}"],
  theme: { extend: { colors: { link: '#7FD962' } } },
  plugins: [],
}"#,
            )
            .expect("should write config content");

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.color("link"), Some("#7FD962"));
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("nonexistent.toml");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_no_file_uses_builtin_dark() {
        let temp = TempDir::new().expect("should create temp dir");
        assert!(find_config_from(temp.path().to_path_buf()).is_none());

        // With no discovered file, load_config falls back to the dark variant
        let config = builtin::dark();
        assert_eq!(config.color("bg"), Some("#0B0E14"));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"this is not valid toml {{{")
            .expect("should write invalid config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::ParseToml(_))));
    }

    #[test]
    fn test_load_config_unsupported_extension() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("theme.yaml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"content: []")
            .expect("should write config content");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::UnsupportedExtension(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(
                br#"
content = []

[theme.extend.colors]
accent = "not-a-color"
"#,
            )
            .expect("should write invalid config");

        let result = load_config(Some(&config_path));
        match result {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_path_absolute() {
        let root = Path::new("/project");
        let absolute = Path::new("/other/path");
        assert_eq!(resolve_path(root, absolute), PathBuf::from("/other/path"));
    }

    #[test]
    fn test_resolve_path_relative() {
        let root = Path::new("/project");
        let relative = Path::new("templates");
        assert_eq!(resolve_path(root, relative), PathBuf::from("/project/templates"));
    }

    #[test]
    fn test_project_root() {
        let config_path = Path::new("/project/theme.toml");
        assert_eq!(project_root(config_path), Some(Path::new("/project")));
    }
}
