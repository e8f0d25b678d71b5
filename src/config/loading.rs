//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::types::Config;

impl Config {
    /// Load configuration from a file, picking the parser by extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            }),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                ext,
            }),
        }
    }

    /// `~/.config/checkperms/config.yaml` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("checkperms").join("config.yaml"))
    }

    /// Load the explicit config file, else the default one if present, else defaults.
    ///
    /// An explicit path must exist and parse. A broken default file is also
    /// an error so a typo there does not silently widen the audit.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = Self::default_path()
            && path.exists()
        {
            return Self::from_file(&path);
        }

        Ok(Self::default())
    }
}
