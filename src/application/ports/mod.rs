//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod novel_source;
mod preferences_storage;

pub use novel_source::{NovelSourcePort, SourceError};
pub use preferences_storage::{PreferencesStoragePort, StorageError};
