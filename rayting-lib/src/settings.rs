//! Shared application settings (backend URL, config file location).
//!
//! The settings file is `~/.config/rayting/settings.toml`:
//!
//! ```toml
//! [backend]
//! api_url = "https://example.org/api"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Environment variable overriding the configured backend URL.
pub const API_URL_ENV: &str = "RAYTING_API_URL";

/// Canonical path to the settings file: `~/.config/rayting/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rayting").join("settings.toml")
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Passed on the command line.
    CliFlag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from `settings.toml`.
    ConfigFile,
    /// Hard-coded default value.
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved setting and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: SettingSource,
}

/// Check that `url` is an http(s) URL and drop any trailing slash.
pub fn normalize_api_url(url: &str) -> Result<String, SettingsError> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SettingsError::Invalid(format!(
            "API URL must start with http:// or https:// (got '{}')",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

/// Pick the backend URL by priority: CLI flag > env var > settings file > default.
pub fn pick_api_url(
    cli_override: Option<&str>,
    env: Option<String>,
    file: Option<String>,
) -> Resolved {
    let non_empty = |s: &String| !s.trim().is_empty();
    if let Some(v) = cli_override.map(str::to_string).filter(non_empty) {
        return Resolved {
            value: v,
            source: SettingSource::CliFlag,
        };
    }
    if let Some(v) = env.filter(non_empty) {
        return Resolved {
            value: v,
            source: SettingSource::EnvVar(API_URL_ENV),
        };
    }
    if let Some(v) = file.filter(non_empty) {
        return Resolved {
            value: v,
            source: SettingSource::ConfigFile,
        };
    }
    Resolved {
        value: DEFAULT_API_URL.to_string(),
        source: SettingSource::Default,
    }
}

/// Resolve the backend URL from the CLI flag, environment and settings file.
pub fn resolve_api_url(cli_override: Option<&str>) -> Resolved {
    pick_api_url(
        cli_override,
        std::env::var(API_URL_ENV).ok(),
        load_api_url_at(&settings_path()),
    )
}

/// Read `backend.api_url` from a settings file, if set.
pub fn load_api_url_at(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let url = doc.get("backend")?.get("api_url")?.as_str()?;
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// Save (or clear) `backend.api_url` in the shared settings file.
pub fn save_api_url(url: Option<&str>) -> Result<PathBuf, SettingsError> {
    let path = settings_path();
    save_api_url_at(&path, url)?;
    Ok(path)
}

/// Save (or clear) `backend.api_url` in the settings file at `path`.
///
/// Uses `toml::Value` for a surgical update so other tables survive.
pub fn save_api_url_at(path: &Path, url: Option<&str>) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse()?,
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::Invalid("settings.toml root is not a table".into()))?;
    let backend = table
        .entry("backend")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let backend = backend
        .as_table_mut()
        .ok_or_else(|| SettingsError::Invalid("[backend] is not a table".into()))?;

    match url {
        Some(u) => {
            backend.insert(
                "api_url".to_string(),
                toml::Value::String(normalize_api_url(u)?),
            );
        }
        None => {
            backend.remove("api_url");
        }
    }

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
