//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Novel Context: 小说与章节（只读）
//! - Reading Context: 阅读偏好与排版

pub mod novel;
pub mod reading;

// 章节正文段落分割
mod paragraphs;

pub use paragraphs::split_paragraphs;
