//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说聚合（只读，来源于远程表格）
//! - 章节列表项与章节详情实体
//! - 章节编号导航（上一章/下一章）

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::Novel;
pub use entities::{ChapterDetail, ChapterListItem, NovelsPage, PageInfo};
pub use errors::NovelError;
pub use value_objects::{ChapterNumber, SheetId};
