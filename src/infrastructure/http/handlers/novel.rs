//! Novel HTTP Handlers
//!
//! 小说列表、章节列表和章节阅读视图

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{
    ChapterSummary, ChapterView, GetChapter, ListChapters, ListNovels, NovelSummary,
    NovelsPageResponse,
};
use crate::domain::reading::ResolvedStyle;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NovelResponse {
    pub id: i64,
    pub title: String,
    pub sheet_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
}

impl From<NovelSummary> for NovelResponse {
    fn from(n: NovelSummary) -> Self {
        Self {
            id: n.id,
            title: n.title,
            sheet_id: n.sheet_id,
            created_at: n.created_at,
            updated_at: n.updated_at,
            created_on: n.created_on,
            updated_on: n.updated_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageInfoResponse {
    pub total_rows: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

#[derive(Debug, Serialize)]
pub struct NovelListResponse {
    pub novels: Vec<NovelResponse>,
    pub page_info: PageInfoResponse,
}

impl From<NovelsPageResponse> for NovelListResponse {
    fn from(page: NovelsPageResponse) -> Self {
        Self {
            page_info: PageInfoResponse {
                total_rows: page.total_rows,
                page: page.page,
                page_size: page.page_size,
                total_pages: page.total_pages,
                is_first_page: page.is_first_page,
                is_last_page: page.is_last_page,
            },
            novels: page.novels.into_iter().map(NovelResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterItemResponse {
    pub chapter: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct ChaptersResponse {
    pub sheet_id: String,
    pub total: usize,
    pub chapters: Vec<ChapterItemResponse>,
}

/// 上一章/下一章
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub sheet_id: String,
    pub chapter: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub style: ResolvedStyle,
    pub navigation: NavigationResponse,
}

impl From<ChapterView> for ChapterResponse {
    fn from(view: ChapterView) -> Self {
        Self {
            sheet_id: view.sheet_id,
            chapter: view.chapter,
            title: view.title,
            paragraphs: view.paragraphs,
            style: view.style,
            navigation: NavigationResponse {
                previous: view.previous,
                next: view.next,
            },
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取小说列表
pub async fn list_novels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<NovelListResponse>>, ApiError> {
    let result = state.list_novels_handler.handle(ListNovels).await?;

    Ok(Json(ApiResponse::success(NovelListResponse::from(result))))
}

/// 获取小说的已翻译章节列表
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Path(sheet_id): Path<String>,
) -> Result<Json<ApiResponse<ChaptersResponse>>, ApiError> {
    let query = ListChapters {
        sheet_id: sheet_id.clone(),
    };

    let result = state.list_chapters_handler.handle(query).await?;

    let chapters: Vec<ChapterItemResponse> = result
        .into_iter()
        .map(|c: ChapterSummary| ChapterItemResponse {
            chapter: c.chapter,
            title: c.title,
        })
        .collect();

    Ok(Json(ApiResponse::success(ChaptersResponse {
        sheet_id,
        total: chapters.len(),
        chapters,
    })))
}

/// 获取章节阅读视图
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    Path((sheet_id, chapter)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ChapterResponse>>, ApiError> {
    let query = GetChapter { sheet_id, chapter };

    let result = state.get_chapter_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(ChapterResponse::from(result))))
}
