//! Novel Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("无效的章节表标识: {0}")]
    InvalidSheetId(String),

    #[error("无效的章节编号: {0}")]
    InvalidChapterNumber(String),
}
