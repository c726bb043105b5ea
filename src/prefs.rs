//! Persistent preference storage.
//!
//! This module handles loading and saving small key-value preferences (the
//! theme choice) in TOML format with platform-specific directory resolution.
//! Access goes through the [`PreferenceStore`] trait so the file-backed store
//! can be swapped for an in-memory one in tests, or when the platform config
//! directory is unavailable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::APP_NAME;

/// Capability interface for persisted key-value preferences.
///
/// A `get` that cannot reach the backing storage reports the key as absent;
/// a failed `set` is an error the caller may log and otherwise ignore. No
/// preference is ever load-bearing enough to abort on.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// On-disk representation of the preference file.
///
/// Kept as a flat string table so the store stays schema-free; typed
/// interpretation happens at the call sites that own each key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceTable {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

/// File-backed preference store.
///
/// # File Location
///
/// - Linux: `~/.config/Termfolio/preferences.toml`
/// - macOS: `~/Library/Application Support/Termfolio/preferences.toml`
/// - Windows: `%APPDATA%\Termfolio\preferences.toml`
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    table: PreferenceTable,
}

impl FilePreferences {
    /// Opens the preference store at the platform default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be resolved.
    /// A missing or unreadable preference file is not an error; it reads as
    /// an empty store.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Opens a preference store backed by `path`.
    ///
    /// The file is read eagerly. A missing file yields an empty store; a
    /// corrupt file is logged and also yields an empty store, so a bad write
    /// from a previous session can never keep the application from starting.
    pub fn open(path: PathBuf) -> Self {
        let table = match Self::read_table(&path) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable preference file {}: {e:#}",
                    path.display()
                );
                PreferenceTable::default()
            }
        };
        Self { path, table }
    }

    /// Returns the platform default preference file path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine platform config directory")?
            .join(APP_NAME);
        Ok(config_dir.join("preferences.toml"))
    }

    /// Returns the path this store reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(path: &Path) -> Result<PreferenceTable> {
        if !path.exists() {
            return Ok(PreferenceTable::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preference file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse preference file: {}", path.display()))
    }

    fn write_table(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preference directory: {}", parent.display())
            })?;
        }
        let contents =
            toml::to_string_pretty(&self.table).context("Failed to serialize preferences")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write preference file: {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.table.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.table
            .values
            .insert(key.to_string(), value.to_string());
        self.write_table()
    }
}

/// In-memory preference store.
///
/// Used as the session fallback when the config directory is unavailable,
/// and as the test double for [`FilePreferences`]. Clones share the same
/// underlying table, so a test can hand a clone to a consumer and still
/// observe writes through its own handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryPreferences {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .expect("preference table lock poisoned")
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("preference table lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("preference table lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferences::open(dir.path().join("preferences.toml"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = FilePreferences::open(dir.path().join("preferences.toml"));
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut store = FilePreferences::open(path.clone());
        store.set("theme", "light").unwrap();
        drop(store);

        let reopened = FilePreferences::open(path);
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_set_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");
        let mut store = FilePreferences::open(path.clone());
        store.set("theme", "dark").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is not [valid toml").unwrap();

        let store = FilePreferences::open(path);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let mut store = MemoryPreferences::new();
        let observer = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(observer.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_store_seeded_entry() {
        let store = MemoryPreferences::with_entry("theme", "light");
        assert_eq!(store.get("theme"), Some("light".to_string()));
        assert_eq!(store.get("other"), None);
    }
}
