//! Default paths and persistent configuration

use crate::session::SuggestSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Word list loaded when none is configured, relative to the working
/// directory.
pub const DEFAULT_WORD_LIST: &str = "words.txt";

/// Get the configuration directory for lineweave
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("lineweave"))
}

/// Default location of the user config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Location of the console's line history
pub fn history_file_path() -> Option<PathBuf> {
    config_dir().ok().map(|dir| dir.join("history.txt"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
///
/// Every field is optional; unset fields fall through to the built-in
/// defaults of [`SuggestSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Word list to load at start-up
    pub dict_path: Option<PathBuf>,
    /// Maximum number of suggestions
    pub limit: Option<usize>,
    /// Maximum edit distance for corrections
    pub max_distance: Option<usize>,
    /// Shortest word that triggers autocomplete
    pub min_prefix_len: Option<usize>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path, returning the
    /// path written.
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, cli: &PersistentConfig) -> Self {
        Self {
            dict_path: cli.dict_path.clone().or_else(|| self.dict_path.clone()),
            limit: cli.limit.or(self.limit),
            max_distance: cli.max_distance.or(self.max_distance),
            min_prefix_len: cli.min_prefix_len.or(self.min_prefix_len),
        }
    }

    /// Resolve suggestion settings, filling gaps with defaults.
    pub fn settings(&self) -> SuggestSettings {
        let defaults = SuggestSettings::default();
        SuggestSettings {
            limit: self.limit.unwrap_or(defaults.limit),
            max_distance: self.max_distance.unwrap_or(defaults.max_distance),
            min_prefix_len: self.min_prefix_len.unwrap_or(defaults.min_prefix_len),
        }
    }

    /// Word list to load: the configured path, else [`DEFAULT_WORD_LIST`]
    /// if it exists in the working directory.
    pub fn word_list(&self) -> Option<PathBuf> {
        self.dict_path.clone().or_else(|| {
            let fallback = PathBuf::from(DEFAULT_WORD_LIST);
            fallback.exists().then_some(fallback)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_config_path() {
        assert!(validate_config_path(Path::new("a/config.json")).is_ok());
        assert!(validate_config_path(Path::new("config.toml")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let config = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config, PersistentConfig::default());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = PersistentConfig {
            limit: Some(7),
            max_distance: Some(1),
            ..Default::default()
        };
        let written = config.save_to(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(PersistentConfig::load_from(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_partial_file_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "limit": 9 }"#).unwrap();
        let config = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.limit, Some(9));
        assert_eq!(config.max_distance, None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(PersistentConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_wins_on_merge() {
        let file = PersistentConfig {
            dict_path: Some(PathBuf::from("file.txt")),
            limit: Some(10),
            max_distance: Some(3),
            min_prefix_len: None,
        };
        let cli = PersistentConfig {
            limit: Some(2),
            ..Default::default()
        };
        let merged = file.merge_with_cli(&cli);
        assert_eq!(merged.limit, Some(2));
        assert_eq!(merged.max_distance, Some(3));
        assert_eq!(merged.dict_path, Some(PathBuf::from("file.txt")));

        let settings = merged.settings();
        assert_eq!(settings.limit, 2);
        assert_eq!(settings.max_distance, 3);
        assert_eq!(settings.min_prefix_len, 2);
    }
}
