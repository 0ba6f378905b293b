//! Preferences Storage Port - 本地持久化键值存储抽象
//!
//! 同步接口，具体实现使用 Sled（或内存实现用于测试）

use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Preferences Storage Port
///
/// 以字符串键保存字符串值
pub trait PreferencesStoragePort: Send + Sync {
    /// 读取键对应的值，不存在返回 `Ok(None)`
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 写入并落盘
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
