//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：唯一的写操作是修改阅读偏好

mod preference_commands;

pub mod handlers;

pub use preference_commands::*;
