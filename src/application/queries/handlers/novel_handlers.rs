//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::NovelSourcePort;
use crate::application::preferences::ReadingPreferencesStore;
use crate::application::queries::{GetChapter, ListChapters, ListNovels};
use crate::domain::novel::{ChapterListItem, ChapterNumber, Novel, NovelsPage, SheetId};
use crate::domain::reading::{resolve_style, ResolvedStyle};

// ============================================================================
// Response DTOs
// ============================================================================

/// 小说摘要响应
#[derive(Debug, Clone)]
pub struct NovelSummary {
    pub id: i64,
    pub title: String,
    pub sheet_id: String,
    pub created_at: String,
    pub updated_at: String,
    /// YYYY-MM-DD，无法解析时为 None
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
}

impl From<Novel> for NovelSummary {
    fn from(novel: Novel) -> Self {
        Self {
            id: novel.id(),
            title: novel.title().to_string(),
            sheet_id: novel.related_sheet_id().to_string(),
            created_at: novel.created_at().to_string(),
            updated_at: novel.updated_at().to_string(),
            created_on: novel.created_on().map(|d| d.to_string()),
            updated_on: novel.updated_on().map(|d| d.to_string()),
        }
    }
}

/// 小说列表页响应
#[derive(Debug, Clone)]
pub struct NovelsPageResponse {
    pub novels: Vec<NovelSummary>,
    pub total_rows: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl From<NovelsPage> for NovelsPageResponse {
    fn from(page: NovelsPage) -> Self {
        let info = page.page_info;
        Self {
            novels: page.novels.into_iter().map(NovelSummary::from).collect(),
            total_rows: info.total_rows,
            page: info.page,
            page_size: info.page_size,
            total_pages: info.total_pages(),
            is_first_page: info.is_first_page,
            is_last_page: info.is_last_page,
        }
    }
}

/// 章节列表项响应
#[derive(Debug, Clone)]
pub struct ChapterSummary {
    pub chapter: String,
    pub title: String,
}

impl From<ChapterListItem> for ChapterSummary {
    fn from(item: ChapterListItem) -> Self {
        Self {
            chapter: item.number().to_string(),
            title: item.title().to_string(),
        }
    }
}

/// 章节阅读视图
#[derive(Debug, Clone)]
pub struct ChapterView {
    pub sheet_id: String,
    pub chapter: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub style: ResolvedStyle,
    /// 上一章编号，第 1 章为 None
    pub previous: Option<String>,
    pub next: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListNovels Handler
pub struct ListNovelsHandler {
    source: Arc<dyn NovelSourcePort>,
}

impl ListNovelsHandler {
    pub fn new(source: Arc<dyn NovelSourcePort>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, _query: ListNovels) -> Result<NovelsPageResponse, ApplicationError> {
        let page = self.source.list_novels().await?;
        tracing::debug!(
            count = page.novels.len(),
            total_rows = page.page_info.total_rows,
            "Novels listed"
        );
        Ok(NovelsPageResponse::from(page))
    }
}

/// ListChapters Handler
pub struct ListChaptersHandler {
    source: Arc<dyn NovelSourcePort>,
}

impl ListChaptersHandler {
    pub fn new(source: Arc<dyn NovelSourcePort>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: ListChapters) -> Result<Vec<ChapterSummary>, ApplicationError> {
        let sheet_id = SheetId::new(query.sheet_id)?;
        let chapters = self.source.list_chapters(&sheet_id).await?;
        tracing::debug!(sheet_id = %sheet_id, count = chapters.len(), "Chapters listed");
        Ok(chapters.into_iter().map(ChapterSummary::from).collect())
    }
}

/// GetChapter Handler
///
/// 组合章节正文、段落分割、当前排版参数和上下章导航
pub struct GetChapterHandler {
    source: Arc<dyn NovelSourcePort>,
    preferences: Arc<ReadingPreferencesStore>,
}

impl GetChapterHandler {
    pub fn new(source: Arc<dyn NovelSourcePort>, preferences: Arc<ReadingPreferencesStore>) -> Self {
        Self {
            source,
            preferences,
        }
    }

    pub async fn handle(&self, query: GetChapter) -> Result<ChapterView, ApplicationError> {
        let sheet_id = SheetId::new(query.sheet_id)?;
        let number = ChapterNumber::new(query.chapter)?;

        let chapter = self
            .source
            .get_chapter(&sheet_id, &number)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found("Chapter", format!("{}/{}", sheet_id, number))
            })?;

        let style = resolve_style(&self.preferences.current());

        Ok(ChapterView {
            sheet_id: sheet_id.to_string(),
            chapter: chapter.number().to_string(),
            title: chapter.display_title(),
            paragraphs: chapter.paragraphs(),
            style,
            previous: chapter.previous().map(|n| n.to_string()),
            next: chapter.next().map(|n| n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::{ChapterDetail, PageInfo};
    use crate::infrastructure::memory::{InMemoryNovelSource, InMemoryPreferencesStorage};

    fn sheet() -> SheetId {
        SheetId::new("m1x2y3").unwrap()
    }

    fn source() -> Arc<InMemoryNovelSource> {
        let page = NovelsPage {
            novels: vec![Novel::new(
                1,
                "Against the Gods",
                sheet(),
                "2024-05-01 10:20:30+00:00",
                "2024-06-01 10:20:30+00:00",
            )],
            page_info: PageInfo {
                total_rows: 51,
                page: 1,
                page_size: 25,
                is_first_page: true,
                is_last_page: false,
            },
        };
        let chapters = vec![
            ChapterDetail::new(
                ChapterNumber::new("1").unwrap(),
                Some("Beginning".to_string()),
                "First\\nSecond",
            ),
            ChapterDetail::new(ChapterNumber::new("2").unwrap(), None, "Only"),
        ];
        Arc::new(
            InMemoryNovelSource::new()
                .with_novels(page)
                .with_chapters(sheet(), chapters),
        )
    }

    fn preferences() -> Arc<ReadingPreferencesStore> {
        Arc::new(ReadingPreferencesStore::new(Arc::new(
            InMemoryPreferencesStorage::new(),
        )))
    }

    #[tokio::test]
    async fn test_list_novels_with_total_pages() {
        let handler = ListNovelsHandler::new(source());
        let page = handler.handle(ListNovels).await.unwrap();

        assert_eq!(page.novels.len(), 1);
        assert_eq!(page.novels[0].sheet_id, "m1x2y3");
        assert_eq!(page.novels[0].created_on.as_deref(), Some("2024-05-01"));
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_list_chapters() {
        let handler = ListChaptersHandler::new(source());
        let chapters = handler
            .handle(ListChapters {
                sheet_id: "m1x2y3".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].chapter, "1");
        assert_eq!(chapters[0].title, "Beginning");
    }

    #[tokio::test]
    async fn test_list_chapters_rejects_blank_sheet() {
        let handler = ListChaptersHandler::new(source());
        let result = handler
            .handle(ListChapters {
                sheet_id: " ".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_get_chapter_view() {
        let handler = GetChapterHandler::new(source(), preferences());
        let view = handler
            .handle(GetChapter {
                sheet_id: "m1x2y3".to_string(),
                chapter: "1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(view.title, "Beginning");
        assert_eq!(view.paragraphs, vec!["First", "Second"]);
        assert_eq!(view.previous, None);
        assert_eq!(view.next.as_deref(), Some("2"));
        assert_eq!(view.style.font_size, "18px");
    }

    #[tokio::test]
    async fn test_get_chapter_title_fallback() {
        let handler = GetChapterHandler::new(source(), preferences());
        let view = handler
            .handle(GetChapter {
                sheet_id: "m1x2y3".to_string(),
                chapter: "2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(view.title, "Chapter 2");
        assert_eq!(view.previous.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_get_missing_chapter_is_not_found() {
        let handler = GetChapterHandler::new(source(), preferences());
        let result = handler
            .handle(GetChapter {
                sheet_id: "m1x2y3".to_string(),
                chapter: "99".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotFound {
                resource_type: "Chapter",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_source_failure_is_external_error() {
        let handler = ListNovelsHandler::new(Arc::new(InMemoryNovelSource::new().failing()));
        let result = handler.handle(ListNovels).await;
        assert!(matches!(
            result,
            Err(ApplicationError::ExternalServiceError(_))
        ));
    }
}
