//! Persisted key/value settings.
//!
//! Only two keys are ever stored: the last edited text and the theme
//! preference. The file store reads its file once when opened and writes the
//! whole map back on every change.

use crate::theme::Theme;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TEXT_KEY: &str = "text";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot find config directory")]
    NoConfigDir,
    #[error("Failed to access settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Values read back from a settings store at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSettings {
    pub text: Option<String>,
    pub theme: Option<Theme>,
}

/// Storage for the persisted text/theme pair.
pub trait SettingsStore {
    fn load(&self) -> PersistedSettings;
    fn save_text(&mut self, text: &str) -> Result<(), SettingsError>;
    fn save_theme(&mut self, theme: Theme) -> Result<(), SettingsError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for Box<T> {
    fn load(&self) -> PersistedSettings {
        (**self).load()
    }

    fn save_text(&mut self, text: &str) -> Result<(), SettingsError> {
        (**self).save_text(text)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), SettingsError> {
        (**self).save_theme(theme)
    }
}

fn settings_from_entries(entries: &BTreeMap<String, String>) -> PersistedSettings {
    PersistedSettings {
        text: entries.get(TEXT_KEY).filter(|t| !t.is_empty()).cloned(),
        theme: entries.get(THEME_KEY).map(|t| Theme::from_stored(t)),
    }
}

/// JSON file backed store, `{"text": "...", "theme": "dark"}`.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSettingsStore {
    /// Default location: `<config_dir>/text2slide/settings.json`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dir = dirs::config_dir()
            .ok_or(SettingsError::NoConfigDir)?
            .join("text2slide");
        Ok(dir.join("settings.json"))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let entries: BTreeMap<String, String> = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        tracing::debug!("Opened settings store at {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Open the store at the default location.
    pub fn open_default() -> Result<Self, SettingsError> {
        Self::open(Self::default_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), SettingsError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn flush(&self) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            SettingsError::Parse {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(io_err)
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> PersistedSettings {
        settings_from_entries(&self.entries)
    }

    fn save_text(&mut self, text: &str) -> Result<(), SettingsError> {
        self.set(TEXT_KEY, text.to_string())
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), SettingsError> {
        self.set(THEME_KEY, theme.as_str().to_string())
    }
}

/// In-memory store. Used when persistence is disabled and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    entries: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> PersistedSettings {
        settings_from_entries(&self.entries)
    }

    fn save_text(&mut self, text: &str) -> Result<(), SettingsError> {
        self.entries.insert(TEXT_KEY.to_string(), text.to_string());
        Ok(())
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), SettingsError> {
        self.entries
            .insert(THEME_KEY.to_string(), theme.as_str().to_string());
        Ok(())
    }
}
