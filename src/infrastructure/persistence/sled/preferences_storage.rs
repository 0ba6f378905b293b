//! Sled-based Preferences Storage Implementation

use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{PreferencesStoragePort, StorageError};
use crate::infrastructure::memory::InMemoryPreferencesStorage;

/// Sled 偏好存储配置
#[derive(Debug, Clone)]
pub struct SledPreferencesConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledPreferencesConfig {
    fn default() -> Self {
        Self {
            db_path: "data/preferences.sled".to_string(),
        }
    }
}

/// Sled 偏好存储
///
/// 每次写入后立即 flush，保证同步落盘
pub struct SledPreferencesStorage {
    db: Db,
}

impl SledPreferencesStorage {
    /// 创建新的存储实例
    pub fn new(config: &SledPreferencesConfig) -> Result<Self, StorageError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledPreferencesStorage initialized");

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let config = SledPreferencesConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// 打开偏好存储；sled 不可用时退回内存存储
///
/// 偏好存储损坏或被占用不能阻止阅读，本次运行中的修改只保存在内存里
pub fn open_preferences_storage(
    config: &SledPreferencesConfig,
) -> Arc<dyn PreferencesStoragePort> {
    match SledPreferencesStorage::new(config) {
        Ok(storage) => storage.arc(),
        Err(e) => {
            tracing::error!(
                db_path = %config.db_path,
                error = %e,
                "Preferences database unavailable, keeping preferences in memory only"
            );
            InMemoryPreferencesStorage::new().arc()
        }
    }
}

impl PreferencesStoragePort for SledPreferencesStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.get(key) {
            Ok(Some(data)) => {
                let value = String::from_utf8(data.to_vec())
                    .map_err(|e| StorageError::InvalidEncoding(e.to_string()))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::DatabaseError(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(key, value.as_bytes())
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        tracing::debug!(key = %key, size = value.len(), "Preferences entry written");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ReadingPreferencesStore, PREFERENCES_STORAGE_KEY};
    use crate::domain::reading::{FontFamily, FontSize, PreferenceUpdate, ReadingPreferences};
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read() {
        let dir = tempdir().unwrap();
        let storage = SledPreferencesStorage::open(dir.path().join("prefs.sled")).unwrap();

        assert!(storage.read("k").unwrap().is_none());
        storage.write("k", "{\"a\":1}").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = tempdir().unwrap();
        let storage = SledPreferencesStorage::open(dir.path().join("prefs.sled")).unwrap();
        storage.db.insert("k", vec![0xff, 0xfe]).unwrap();

        assert!(matches!(
            storage.read("k"),
            Err(StorageError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_new_store_handle_sees_persisted_preferences() {
        let dir = tempdir().unwrap();
        let storage = SledPreferencesStorage::open(dir.path().join("prefs.sled"))
            .unwrap()
            .arc();

        let first = ReadingPreferencesStore::new(storage.clone());
        first.apply(PreferenceUpdate::FontFamily(FontFamily::Bookerly));
        let expected = first.apply(PreferenceUpdate::FontSize(FontSize::new(26).unwrap()));

        let second = ReadingPreferencesStore::new(storage);
        assert_eq!(second.current(), expected);
        assert_ne!(second.current(), ReadingPreferences::default());
    }

    #[test]
    fn test_unopenable_path_falls_back_to_memory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = SledPreferencesConfig {
            db_path: file.path().join("prefs.sled").to_string_lossy().to_string(),
        };
        assert!(SledPreferencesStorage::new(&config).is_err());

        let storage = open_preferences_storage(&config);
        let store = ReadingPreferencesStore::new(storage.clone());
        assert_eq!(store.current(), ReadingPreferences::default());

        let updated = store.apply(PreferenceUpdate::FontSize(FontSize::new(20).unwrap()));
        assert_eq!(store.current(), updated);
        assert!(storage.read(PREFERENCES_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_open_preferences_storage_uses_sled_when_available() {
        let dir = tempdir().unwrap();
        let config = SledPreferencesConfig {
            db_path: dir.path().join("prefs.sled").to_string_lossy().to_string(),
        };

        let storage = open_preferences_storage(&config);
        storage.write("k", "v").unwrap();

        assert!(dir.path().join("prefs.sled").is_dir());
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_corrupted_entry_loads_default() {
        let dir = tempdir().unwrap();
        let storage = SledPreferencesStorage::open(dir.path().join("prefs.sled")).unwrap();
        storage.write(PREFERENCES_STORAGE_KEY, "not json").unwrap();

        let store = ReadingPreferencesStore::new(storage.arc());
        assert_eq!(store.load(), ReadingPreferences::default());
    }
}
