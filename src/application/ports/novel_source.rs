//! Novel Source Port - 远程小说数据源抽象
//!
//! 定义三个只读操作，具体实现在 infrastructure/adapters 层（NocoDB 表格 API）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::novel::{ChapterDetail, ChapterListItem, ChapterNumber, NovelsPage, SheetId};

/// 数据源错误
///
/// 原样向上传播，不重试
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Novel Source Port
///
/// 每个操作恰好发起一次远程读取请求
#[async_trait]
pub trait NovelSourcePort: Send + Sync {
    /// 小说列表（远程默认分页的第一页）
    async fn list_novels(&self) -> Result<NovelsPage, SourceError>;

    /// 已翻译章节列表，顺序保持远程返回的顺序
    async fn list_chapters(&self, sheet_id: &SheetId) -> Result<Vec<ChapterListItem>, SourceError>;

    /// 单个章节
    ///
    /// 过滤结果为空时返回 `Ok(None)`，不视为错误
    async fn get_chapter(
        &self,
        sheet_id: &SheetId,
        chapter: &ChapterNumber,
    ) -> Result<Option<ChapterDetail>, SourceError>;
}
