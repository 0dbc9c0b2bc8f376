//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--file`, `--no-color`, handled at the call-site)
//! 2. Environment variables: `LINEUP_STORAGE__DATA_FILE`, `LINEUP_OUTPUT__NO_COLOR`, ...
//! 3. Config file (`--config`, else [`AppConfig::config_path`]); optional
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

const ENV_PREFIX: &str = "LINEUP";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the lineup lives.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// CSV file holding the lineup, relative to the working directory.
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Banner printed when the menu starts.
    pub title: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("players.csv"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            title: "Baseball Team Manager".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, environment and defaults.
    ///
    /// `config_file` is the path the user passed via `--config`, or `None`
    /// for [`Self::config_path`].  A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), "Loading configuration");

        config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(config::Config::try_deserialize::<Self>)
            .with_context(|| format!("Failed to load configuration from '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.lineup.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "lineup", "lineup")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".lineup.toml"))
    }

    /// The lineup file to use: `--file` / `LINEUP_FILE` wins over config.
    pub fn data_file(&self, args: &GlobalArgs) -> PathBuf {
        args.file
            .clone()
            .unwrap_or_else(|| self.storage.data_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.storage.data_file, PathBuf::from("players.csv"));
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.title, "Baseball Team Manager");
    }

    #[test]
    fn missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(cfg.output.title, AppConfig::default().output.title);
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage]\ndata_file = \"team.csv\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.storage.data_file, PathBuf::from("team.csv"));
        // Untouched sections keep their defaults.
        assert_eq!(cfg.output.title, "Baseball Team Manager");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_flag_wins_over_config() {
        let cfg = AppConfig::default();
        let args = GlobalArgs {
            file: Some(PathBuf::from("other.csv")),
            ..GlobalArgs::default()
        };
        assert_eq!(cfg.data_file(&args), PathBuf::from("other.csv"));
        assert_eq!(
            cfg.data_file(&GlobalArgs::default()),
            PathBuf::from("players.csv")
        );
    }

    #[test]
    fn default_config_survives_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
