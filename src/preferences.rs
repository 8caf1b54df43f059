//! Theme preference storage.
//!
//! This module provides:
//! - File-backed preferences for native platforms
//! - An in-memory store for WASM and tests

use crate::types::ThemeMode;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Preference store is poisoned")]
    Poisoned,
}

/// Read/write access to the single light/dark flag.
pub trait PreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode>;
    fn save_theme(&self, mode: ThemeMode) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    theme: Option<ThemeMode>,
}

/// Saved preference if there is one, otherwise the configured default.
pub fn initial_theme(store: &dyn PreferenceStore, fallback: ThemeMode) -> ThemeMode {
    store.load_theme().unwrap_or(fallback)
}

/// Writes the theme only when it differs from the one the session started with
/// or last saved, so an untouched toggle leaves the configured default in charge.
#[derive(Debug, Clone)]
pub struct ThemePersistence {
    last: ThemeMode,
}

impl ThemePersistence {
    pub fn new(initial: ThemeMode) -> Self {
        Self { last: initial }
    }

    /// Returns whether a write happened.
    pub fn record(
        &mut self,
        store: &dyn PreferenceStore,
        mode: ThemeMode,
    ) -> Result<bool, PreferenceError> {
        if mode == self.last {
            return Ok(false);
        }
        store.save_theme(mode)?;
        self.last = mode;
        Ok(true)
    }
}

// ============================================
// In-memory backend
// ============================================

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    theme: Mutex<Option<ThemeMode>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode> {
        *self.theme.lock().ok()?
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        let mut theme = self.theme.lock().map_err(|_| PreferenceError::Poisoned)?;
        *theme = Some(mode);
        Ok(())
    }
}

// ============================================
// File backend (native platforms)
// ============================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `{data_local_dir}/mentify/preferences.json`, or under `cache/` when there is none.
    pub fn default_location() -> Self {
        let dir = dirs::data_local_dir()
            .map(|dir| dir.join("mentify"))
            .unwrap_or_else(|| PathBuf::from("cache"));
        Self::new(dir.join("preferences.json"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> Result<Preferences, PreferenceError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Option<ThemeMode> {
        match self.read() {
            Ok(prefs) => prefs.theme,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable preferences");
                None
            }
        }
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let prefs = Preferences { theme: Some(mode) };
        fs::write(&self.path, serde_json::to_string_pretty(&prefs)?)?;
        Ok(())
    }
}

/// The store the app uses on this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(FilePreferenceStore::default_location())
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(MemoryPreferenceStore::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(store.load_theme(), None);
        store.save_theme(ThemeMode::Light).unwrap();
        assert_eq!(store.load_theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_configured_theme_used_when_nothing_saved() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(initial_theme(&store, ThemeMode::Light), ThemeMode::Light);
        assert_eq!(initial_theme(&store, ThemeMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn test_saved_theme_beats_configured_theme() {
        let store = MemoryPreferenceStore::default();
        store.save_theme(ThemeMode::Light).unwrap();
        assert_eq!(initial_theme(&store, ThemeMode::Dark), ThemeMode::Light);
    }

    #[test]
    fn test_startup_without_toggle_writes_nothing() {
        let store = MemoryPreferenceStore::default();
        let initial = initial_theme(&store, ThemeMode::Dark);
        let mut persistence = ThemePersistence::new(initial);

        assert!(!persistence.record(&store, initial).unwrap());
        assert_eq!(store.load_theme(), None);
        assert_eq!(initial_theme(&store, ThemeMode::Light), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_saved_once_per_change() {
        let store = MemoryPreferenceStore::default();
        let mut persistence = ThemePersistence::new(ThemeMode::Dark);

        assert!(persistence.record(&store, ThemeMode::Light).unwrap());
        assert_eq!(store.load_theme(), Some(ThemeMode::Light));
        assert!(!persistence.record(&store, ThemeMode::Light).unwrap());

        assert!(persistence.record(&store, ThemeMode::Dark).unwrap());
        assert_eq!(initial_theme(&store, ThemeMode::Light), ThemeMode::Dark);
    }

    #[test]
    fn test_file_store_untouched_until_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        let mut persistence = ThemePersistence::new(initial_theme(&store, ThemeMode::Dark));

        persistence.record(&store, ThemeMode::Dark).unwrap();
        assert!(!store.path().exists());

        persistence.record(&store, ThemeMode::Light).unwrap();
        assert_eq!(store.load_theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested/deeper/prefs.json"));
        store.save_theme(ThemeMode::Dark).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load_theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.load_theme(), None);

        store.save_theme(ThemeMode::Light).unwrap();
        assert_eq!(store.load_theme(), Some(ThemeMode::Light));
    }
}
