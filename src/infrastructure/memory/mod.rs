//! Memory Layer - In-Memory Implementations
//!
//! 偏好存储与小说数据源的内存实现，用于测试和本地调试

mod novel_source;
mod preferences_storage;

pub use novel_source::InMemoryNovelSource;
pub use preferences_storage::InMemoryPreferencesStorage;
