use crate::splitter::SplitOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://text2slide.app/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {source}")]
    IoError { source: std::io::Error },
    #[error("Failed to parse config file: {source}")]
    ParseError { source: serde_json::Error },
    #[error("Failed to parse TOML config: {source}")]
    TomlParseError { source: toml::de::Error },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location used as the page URL when none is given on the command line.
    pub share_base_url: String,
    /// Turn bare URLs in slides into links.
    pub linkify: bool,
    /// Override for the settings file.
    pub settings_path: Option<PathBuf>,
    /// Log file; the terminal is owned by the UI.
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            linkify: true,
            settings_path: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON or TOML file, chosen by extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError { source: e })?;

        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::TomlParseError { source: e })
        } else {
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError { source: e })
        }
    }

    /// Load the first readable config from the usual places, else defaults.
    pub fn load_with_fallback() -> Self {
        let config_paths = [
            ".text2slide/config.json",
            ".text2slide/config.toml",
            "text2slide.config.json",
            "text2slide.config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                match Self::load_from_file(path) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {path}");
                        return config.with_env_overrides();
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {path}: {e}");
                    }
                }
            }
        }

        tracing::info!("Using default configuration");
        Self::default().with_env_overrides()
    }

    /// Apply `TEXT2SLIDE_BASE_URL` and `TEXT2SLIDE_LOG_PATH`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("TEXT2SLIDE_BASE_URL") {
            if !url.trim().is_empty() {
                self.share_base_url = url;
            }
        }
        if let Ok(path) = std::env::var("TEXT2SLIDE_LOG_PATH") {
            self.log_path = Some(PathBuf::from(path));
        }
        self
    }

    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            linkify: self.linkify,
        }
    }

    /// Log file location: configured path, else next to the settings file.
    pub fn resolved_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(|| {
            dirs::config_dir().map(|dir| dir.join("text2slide").join("text2slide.log"))
        })
    }
}
