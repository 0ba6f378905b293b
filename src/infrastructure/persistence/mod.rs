//! Persistence Layer - 数据持久化
//!
//! Sled 嵌入式键值存储实现

pub mod sled;

pub use self::sled::{open_preferences_storage, SledPreferencesConfig, SledPreferencesStorage};
