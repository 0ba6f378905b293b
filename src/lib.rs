//! Lector - 远程表格驱动的小说阅读器
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说、章节、章节编号与导航
//! - Reading Context: 阅读偏好与样式解析
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NovelSource, PreferencesStorage）
//! - Preferences: 阅读偏好存储句柄
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API
//! - Adapters: 远程表格 API 客户端
//! - Persistence: Sled 偏好存储
//! - Memory: 内存实现（测试与本地调试）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
