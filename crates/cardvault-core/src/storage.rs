//! Persistent storage using redb.
//!
//! Only presentation preferences outlive a session; the collection itself is
//! rebuilt from seed data on every start.

use crate::error::VaultError;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

mod preferences;

/// String key-value settings (key: setting name, value: plain enumeration value)
const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the preferences table if missing.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, VaultError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Load a single setting. Returns `None` if it was never saved.
    pub fn load_setting(&self, key: &str) -> Result<Option<String>, VaultError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{AccentColor, Preferences, Theme, ACCENT_COLOR_KEY, THEME_KEY};
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_create_storage_in_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("dir").join("prefs.redb");
        assert!(Storage::new(&db_path).is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_load_missing_setting() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load_setting("language").unwrap().is_none());
    }

    #[test]
    fn test_settings_can_be_overwritten() {
        let (storage, _temp) = create_test_storage();

        let mut prefs = Preferences::default();
        prefs.set_accent_color(AccentColor::Blue);
        storage.save_preferences(&prefs).unwrap();
        prefs.set_accent_color(AccentColor::Red);
        storage.save_preferences(&prefs).unwrap();

        assert_eq!(
            storage.load_setting(ACCENT_COLOR_KEY).unwrap().as_deref(),
            Some("red")
        );
    }

    #[test]
    fn test_storage_reopens_with_saved_values() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            let mut prefs = Preferences::default();
            prefs.set_theme(Theme::Light);
            storage.save_preferences(&prefs).unwrap();
        }

        let storage = Storage::new(&db_path).unwrap();
        assert_eq!(storage.load_setting(THEME_KEY).unwrap().as_deref(), Some("light"));
    }
}
