//! In-Memory Novel Source Implementation
//!
//! 不发起网络请求，直接返回预置的数据

use async_trait::async_trait;
use std::collections::HashMap;

use crate::application::ports::{NovelSourcePort, SourceError};
use crate::domain::novel::{
    ChapterDetail, ChapterListItem, ChapterNumber, NovelsPage, PageInfo, SheetId,
};

/// 内存小说数据源
pub struct InMemoryNovelSource {
    novels: NovelsPage,
    chapters: HashMap<SheetId, Vec<ChapterDetail>>,
    fail: bool,
}

impl InMemoryNovelSource {
    pub fn new() -> Self {
        Self {
            novels: NovelsPage {
                novels: Vec::new(),
                page_info: PageInfo::default(),
            },
            chapters: HashMap::new(),
            fail: false,
        }
    }

    pub fn with_novels(mut self, page: NovelsPage) -> Self {
        self.novels = page;
        self
    }

    /// 预置某个章节表的全部章节（均视为已翻译）
    pub fn with_chapters(mut self, sheet_id: SheetId, chapters: Vec<ChapterDetail>) -> Self {
        self.chapters.insert(sheet_id, chapters);
        self
    }

    /// 所有请求都返回网络错误
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check(&self) -> Result<(), SourceError> {
        if self.fail {
            return Err(SourceError::NetworkError(
                "in-memory source configured to fail".to_string(),
            ));
        }
        Ok(())
    }

    fn table(&self, sheet_id: &SheetId) -> Result<&[ChapterDetail], SourceError> {
        self.chapters
            .get(sheet_id)
            .map(|v| v.as_slice())
            .ok_or_else(|| SourceError::ServiceError {
                status: 404,
                body: format!("table {} not found", sheet_id),
            })
    }
}

impl Default for InMemoryNovelSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NovelSourcePort for InMemoryNovelSource {
    async fn list_novels(&self) -> Result<NovelsPage, SourceError> {
        self.check()?;
        Ok(self.novels.clone())
    }

    async fn list_chapters(&self, sheet_id: &SheetId) -> Result<Vec<ChapterListItem>, SourceError> {
        self.check()?;
        Ok(self
            .table(sheet_id)?
            .iter()
            .map(|c| {
                ChapterListItem::new(c.number().clone(), c.title().unwrap_or_default())
            })
            .collect())
    }

    async fn get_chapter(
        &self,
        sheet_id: &SheetId,
        chapter: &ChapterNumber,
    ) -> Result<Option<ChapterDetail>, SourceError> {
        self.check()?;
        Ok(self
            .table(sheet_id)?
            .iter()
            .find(|c| c.number() == chapter)
            .cloned())
    }
}
