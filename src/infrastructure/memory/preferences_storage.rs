//! In-Memory Preferences Storage Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{PreferencesStoragePort, StorageError};

/// 内存偏好存储
///
/// 进程退出后数据丢失
pub struct InMemoryPreferencesStorage {
    entries: DashMap<String, String>,
}

impl InMemoryPreferencesStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryPreferencesStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesStoragePort for InMemoryPreferencesStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        tracing::debug!(key = %key, size = value.len(), "Preferences entry written");
        Ok(())
    }
}
