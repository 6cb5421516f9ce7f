//! Preference Storage - the three presentation settings
//!
//! Each setting is its own entry keyed by [`THEME_KEY`], [`ACCENT_COLOR_KEY`]
//! and [`LANGUAGE_KEY`], holding the lowercase variant name.

use std::str::FromStr;

use tracing::warn;

use crate::error::VaultError;
use crate::preferences::{
    AccentColor, Language, Preferences, Theme, ACCENT_COLOR_KEY, LANGUAGE_KEY, THEME_KEY,
};

use super::{Storage, PREFERENCES_TABLE};

impl Storage {
    /// Save all three preferences in one transaction
    pub fn save_preferences(&self, prefs: &Preferences) -> Result<(), VaultError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            for (key, value) in prefs.entries() {
                table.insert(key, value)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load preferences, falling back to the default for anything absent.
    ///
    /// An unrecognised stored value is logged and replaced by the default
    /// rather than failing startup.
    pub fn load_preferences(&self) -> Result<Preferences, VaultError> {
        Ok(Preferences {
            theme: self.load_or_default::<Theme>(THEME_KEY)?,
            accent_color: self.load_or_default::<AccentColor>(ACCENT_COLOR_KEY)?,
            language: self.load_or_default::<Language>(LANGUAGE_KEY)?,
        })
    }

    fn load_or_default<T>(&self, key: &str) -> Result<T, VaultError>
    where
        T: FromStr<Err = VaultError> + Default,
    {
        let Some(raw) = self.load_setting(key)? else {
            return Ok(T::default());
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "Ignoring stored preference");
                Ok(T::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Write a raw value, bypassing the typed setters
    fn write_raw(storage: &Storage, key: &str, value: &str) {
        let db = storage.db.read();
        let write_txn = db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE).unwrap();
            table.insert(key, value).unwrap();
        }
        write_txn.commit().unwrap();
    }

    #[test]
    fn test_fresh_storage_yields_defaults() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("prefs.redb")).unwrap();

        assert_eq!(storage.load_preferences().unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_and_load_preferences() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("prefs.redb")).unwrap();

        let prefs = Preferences {
            theme: Theme::Light,
            accent_color: AccentColor::Yellow,
            language: Language::En,
        };
        storage.save_preferences(&prefs).unwrap();

        assert_eq!(storage.load_preferences().unwrap(), prefs);
        assert_eq!(storage.load_setting("accentColor").unwrap().as_deref(), Some("yellow"));
    }

    #[test]
    fn test_unknown_value_falls_back_per_key() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("prefs.redb")).unwrap();

        write_raw(&storage, THEME_KEY, "neon");
        write_raw(&storage, LANGUAGE_KEY, "en");

        let prefs = storage.load_preferences().unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::En);
    }
}
