//! # Configuration Module
//!
//! Settings for a generation run, layered lowest to highest:
//!
//! 1. Built-in defaults ([`GeneratorSettings::default`])
//! 2. A TOML settings file, either given explicitly or auto-detected as
//!    `fsdgen-python.toml` next to the model file
//! 3. Environment variables ([`GeneratorSettings::apply_env`])
//! 4. Command-line flags
//!
//! ## Environment Variables
//!
//! ### `FSDGEN_GENERATOR_NAME`
//!
//! Name written into the `DO NOT EDIT` marker of every generated file.
//! Default: `PythonGenerator`.
//!
//! ### `FSDGEN_NO_HTTP`
//!
//! `true`/`1` to skip HTTP client generation. Default: `false`.
//!
//! ## Example Settings File
//!
//! ```toml
//! generator_name = "fsdgen-python"
//! no_http = false
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up alongside the model when no settings path is given.
pub const SETTINGS_FILE_NAME: &str = "fsdgen-python.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Name written into the generated-file marker comment.
    pub generator_name: String,
    /// Omit HTTP client generation.
    pub no_http: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            generator_name: "PythonGenerator".to_string(),
            no_http: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl GeneratorSettings {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        let mut settings = GeneratorSettings::default();
        settings.apply_env();
        settings
    }

    /// Override fields from `FSDGEN_*` environment variables that are set.
    pub fn apply_env(&mut self) {
        if let Ok(name) = env::var("FSDGEN_GENERATOR_NAME") {
            if !name.trim().is_empty() {
                self.generator_name = name;
            }
        }
        if let Some(no_http) = env::var("FSDGEN_NO_HTTP").ok().as_deref().and_then(parse_flag) {
            self.no_http = no_http;
        }
    }

    /// Parse a TOML settings file; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid settings TOML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }
}

/// Resolve the settings path.
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. `fsdgen-python.toml` alongside the model
/// 3. None
pub fn resolve_settings_path(explicit_path: Option<&Path>, model_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = model_path.parent()?.join(SETTINGS_FILE_NAME);
    candidate.exists().then_some(candidate)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.generator_name, "PythonGenerator");
        assert!(!settings.no_http);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("OFF"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorSettings::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "no_http = true\n").unwrap();
        let settings = GeneratorSettings::load(&path).unwrap();
        assert!(settings.no_http);
        assert_eq!(settings.generator_name, "PythonGenerator");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "no_http = \"sometimes\"\n").unwrap();
        let err = GeneratorSettings::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings"));
    }

    #[test]
    fn test_resolve_settings_path() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("api.yaml");
        assert!(resolve_settings_path(None, &model).is_none());

        fs::write(dir.path().join(SETTINGS_FILE_NAME), "").unwrap();
        assert_eq!(
            resolve_settings_path(None, &model),
            Some(dir.path().join(SETTINGS_FILE_NAME))
        );

        let explicit = dir.path().join("other.toml");
        assert_eq!(resolve_settings_path(Some(explicit.as_path()), &model), Some(explicit));
    }
}
