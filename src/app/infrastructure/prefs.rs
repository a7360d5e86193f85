//! The persisted user preference file.
//!
//! One JSON document, one meaningful key: `theme`. An absent key (or an
//! absent, unreadable, or corrupt file) means the user has never made an
//! explicit choice and the app follows the system color scheme. Storage
//! failure is never surfaced to the user; the preference simply stops
//! being retained across restarts.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::{AppError, Result};
use crate::app::domain::ThemeChoice;

/// Access to the persisted theme choice. Production code uses
/// [`FilePrefStore`]; tests inject an in-memory fake.
pub trait PrefStore {
    /// The stored choice, or `None` when the user has never chosen.
    fn load_theme(&self) -> Option<ThemeChoice>;

    /// Persist `choice` synchronously.
    fn store_theme(&mut self, choice: ThemeChoice) -> Result<()>;
}

/// `None` is the fully degraded store: nothing is ever retained, nothing
/// ever fails. Lets the app run when no config directory exists at all.
impl<P: PrefStore> PrefStore for Option<P> {
    fn load_theme(&self) -> Option<ThemeChoice> {
        self.as_ref().and_then(|s| s.load_theme())
    }

    fn store_theme(&mut self, choice: ThemeChoice) -> Result<()> {
        match self {
            Some(store) => store.store_theme(choice),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeChoice>,
}

pub struct FilePrefStore {
    path: PathBuf,
}

impl FilePrefStore {
    /// Store at the default location (`<config_dir>/devhandbook/preferences.json`).
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| AppError::Preferences("no config directory".to_string()))?;
        path.push("devhandbook");
        path.push("preferences.json");
        Ok(Self { path })
    }

    /// Store at an explicit path. Used by tests.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    eprintln!("Failed to parse preferences: {}. Treating as unset.", e);
                    Preferences::default()
                }
            },
            // File doesn't exist yet (or is unreadable): a valid "unset" state
            Err(_) => Preferences::default(),
        }
    }

    fn write(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PrefStore for FilePrefStore {
    fn load_theme(&self) -> Option<ThemeChoice> {
        self.read().theme
    }

    fn store_theme(&mut self, choice: ThemeChoice) -> Result<()> {
        let mut prefs = self.read();
        prefs.theme = Some(choice);
        self.write(&prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FilePrefStore {
        FilePrefStore::at_path(dir.path().join("preferences.json"))
    }

    #[test]
    fn test_missing_file_means_unset() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load_theme(), None);
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.store_theme(ThemeChoice::Dark).unwrap();

        // Fresh store over the same path simulates a restart
        assert_eq!(store_in(&dir).load_theme(), Some(ThemeChoice::Dark));
    }

    #[test]
    fn test_overwrite_keeps_last_choice() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.store_theme(ThemeChoice::Dark).unwrap();
        store.store_theme(ThemeChoice::Light).unwrap();
        assert_eq!(store.load_theme(), Some(ThemeChoice::Light));
    }

    #[test]
    fn test_corrupt_file_treated_as_unset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(FilePrefStore::at_path(path).load_theme(), None);
    }

    #[test]
    fn test_theme_key_literal_strings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = FilePrefStore::at_path(path.clone());
        store.store_theme(ThemeChoice::Light).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\""));
        assert!(raw.contains("\"light\""));
    }
}
