//! NocoDB Table Client - 调用远程表格 HTTP API
//!
//! 实现 NovelSourcePort trait
//!
//! 远程 API:
//! GET {base}/api/v2/tables/{tableId}/records?fields=...&where=...&limit=...
//! Header: xc-token: {token}
//! Response: {"list": [...], "pageInfo": {...}}  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{NovelSourcePort, SourceError};
use crate::domain::novel::{
    ChapterDetail, ChapterListItem, ChapterNumber, Novel, NovelsPage, PageInfo, SheetId,
};

/// 认证 header
const TOKEN_HEADER: &str = "xc-token";

/// 章节表字段
const FIELD_CHAPTER: &str = "Chapter";
const FIELD_TRANSLATED_TITLE: &str = "Translated Title";
const FIELD_TRANSLATED_TEXT: &str = "Translated Text (English)";

/// 章节列表一次取完
const UNBOUNDED_LIMIT: u64 = 999_999_999;

// ============================================================================
// Wire DTOs
// ============================================================================

/// 记录列表响应
#[derive(Debug, Deserialize)]
struct RecordList<T> {
    #[serde(default = "Vec::new")]
    list: Vec<T>,
    #[serde(rename = "pageInfo", default)]
    page_info: Option<RemotePageInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RemotePageInfo {
    total_rows: u64,
    page: u64,
    page_size: u64,
    is_first_page: bool,
    is_last_page: bool,
}

impl From<RemotePageInfo> for PageInfo {
    fn from(info: RemotePageInfo) -> Self {
        Self {
            total_rows: info.total_rows,
            page: info.page,
            page_size: info.page_size,
            is_first_page: info.is_first_page,
            is_last_page: info.is_last_page,
        }
    }
}

/// 小说表记录
#[derive(Debug, Deserialize)]
struct NovelRecord {
    #[serde(rename = "Id")]
    id: i64,
    #[serde(rename = "CreatedAt", default)]
    created_at: Option<String>,
    #[serde(rename = "UpdatedAt", default)]
    updated_at: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(default)]
    related_sheet_id: Option<String>,
}

/// 章节表记录
#[derive(Debug, Deserialize)]
struct ChapterRecord {
    #[serde(rename = "Chapter", default)]
    chapter: Option<Value>,
    #[serde(rename = "Translated Title", default)]
    translated_title: Option<String>,
    #[serde(rename = "Translated Text (English)", default)]
    translated_text: Option<String>,
}

impl ChapterRecord {
    /// Chapter 列可能是文本也可能是数字
    fn number(&self) -> Option<ChapterNumber> {
        let raw = match self.chapter.as_ref()? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        ChapterNumber::new(raw).ok()
    }
}

// ============================================================================
// Client
// ============================================================================

/// NocoDB 客户端配置
#[derive(Debug, Clone)]
pub struct NocoClientConfig {
    /// 服务基础 URL（不含 /api/v2）
    pub base_url: String,
    /// 静态访问令牌
    pub token: String,
    /// 小说列表所在的表 ID
    pub novels_table: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for NocoClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            token: String::new(),
            novels_table: String::new(),
            timeout_secs: 30,
        }
    }
}

impl NocoClientConfig {
    pub fn new(base_url: impl Into<String>, novels_table: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            novels_table: novels_table.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// NocoDB 表格客户端
///
/// 无重试、无缓存，每个操作一次请求
pub struct NocoTableClient {
    client: Client,
    config: NocoClientConfig,
}

impl NocoTableClient {
    /// 创建新的客户端
    pub fn new(config: NocoClientConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取记录列表 URL
    fn records_url(&self, table_id: &str) -> String {
        format!(
            "{}/api/v2/tables/{}/records",
            self.config.base_url.trim_end_matches('/'),
            table_id
        )
    }

    /// 发送 GET 请求并解析 JSON
    async fn fetch<T: DeserializeOwned>(
        &self,
        table_id: &str,
        query: &[(&str, String)],
    ) -> Result<RecordList<T>, SourceError> {
        let url = self.records_url(table_id);

        tracing::debug!(url = %url, query = ?query, "Sending table records request");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.config.token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout
                } else if e.is_connect() {
                    SourceError::NetworkError(format!("Cannot connect to table service: {}", e))
                } else {
                    SourceError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<RecordList<T>>()
            .await
            .map_err(|e| SourceError::InvalidResponse(format!("Failed to parse records: {}", e)))
    }
}

/// `(Field,eq,value)` 过滤表达式
fn eq_filter(field: &str, value: &str) -> String {
    format!("({},eq,{})", field, value)
}

#[async_trait]
impl NovelSourcePort for NocoTableClient {
    async fn list_novels(&self) -> Result<NovelsPage, SourceError> {
        let records: RecordList<NovelRecord> = self.fetch(&self.config.novels_table, &[]).await?;

        let novels: Vec<Novel> = records
            .list
            .into_iter()
            .filter_map(|r| match SheetId::new(r.related_sheet_id.unwrap_or_default()) {
                Ok(sheet_id) => Some(Novel::new(
                    r.id,
                    r.title.unwrap_or_default(),
                    sheet_id,
                    r.created_at.unwrap_or_default(),
                    r.updated_at.unwrap_or_default(),
                )),
                Err(e) => {
                    tracing::warn!(novel_id = r.id, error = %e, "Skipping novel without usable sheet id");
                    None
                }
            })
            .collect();

        let page_info = records.page_info.map(PageInfo::from).unwrap_or_default();

        tracing::info!(
            count = novels.len(),
            total_rows = page_info.total_rows,
            page = page_info.page,
            "Novels fetched"
        );

        Ok(NovelsPage { novels, page_info })
    }

    async fn list_chapters(&self, sheet_id: &SheetId) -> Result<Vec<ChapterListItem>, SourceError> {
        let query = [
            (
                "fields",
                format!("{},{}", FIELD_CHAPTER, FIELD_TRANSLATED_TITLE),
            ),
            ("where", eq_filter("Status", "Translated")),
            ("limit", UNBOUNDED_LIMIT.to_string()),
        ];
        let records: RecordList<ChapterRecord> = self.fetch(sheet_id.as_str(), &query).await?;

        let chapters: Vec<ChapterListItem> = records
            .list
            .into_iter()
            .filter_map(|r| match r.number() {
                Some(number) => Some(ChapterListItem::new(
                    number,
                    r.translated_title.unwrap_or_default(),
                )),
                None => {
                    tracing::warn!(sheet_id = %sheet_id, chapter = ?r.chapter, "Skipping chapter without number");
                    None
                }
            })
            .collect();

        tracing::info!(sheet_id = %sheet_id, count = chapters.len(), "Chapters fetched");

        Ok(chapters)
    }

    async fn get_chapter(
        &self,
        sheet_id: &SheetId,
        chapter: &ChapterNumber,
    ) -> Result<Option<ChapterDetail>, SourceError> {
        let query = [
            (
                "fields",
                format!(
                    "{},{},{}",
                    FIELD_CHAPTER, FIELD_TRANSLATED_TITLE, FIELD_TRANSLATED_TEXT
                ),
            ),
            ("where", eq_filter(FIELD_CHAPTER, chapter.as_str())),
            ("limit", "1".to_string()),
        ];
        let records: RecordList<ChapterRecord> = self.fetch(sheet_id.as_str(), &query).await?;

        // 取第 0 条；空列表表示章节不存在
        let Some(record) = records.list.into_iter().next() else {
            tracing::info!(sheet_id = %sheet_id, chapter = %chapter, "Chapter not found");
            return Ok(None);
        };

        let number = record.number().unwrap_or_else(|| chapter.clone());
        let detail = ChapterDetail::new(
            number,
            record.translated_title,
            record.translated_text.unwrap_or_default(),
        );

        tracing::info!(
            sheet_id = %sheet_id,
            chapter = %chapter,
            text_len = detail.text().len(),
            "Chapter fetched"
        );

        Ok(Some(detail))
    }
}
