//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（NovelSource、PreferencesStorage）
//! - preferences: 阅读偏好存储句柄（load / update / persist）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod preferences;
pub mod queries;

// Re-exports
pub use commands::{handlers::UpdatePreferenceHandler, UpdatePreference};

pub use error::ApplicationError;

pub use ports::{NovelSourcePort, PreferencesStoragePort, SourceError, StorageError};

pub use preferences::{ReadingPreferencesStore, PREFERENCES_STORAGE_KEY};

pub use queries::{
    // Novel queries
    GetChapter,
    ListChapters,
    ListNovels,
    // Preference queries
    GetPreferenceOptions,
    GetPreferences,
    // Handlers
    handlers::{
        ChapterSummary, ChapterView, GetChapterHandler, GetPreferenceOptionsHandler,
        GetPreferencesHandler, ListChaptersHandler, ListNovelsHandler, NovelSummary,
        NovelsPageResponse, PreferencesResponse,
    },
};
