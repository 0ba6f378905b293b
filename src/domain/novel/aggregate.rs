//! Novel Context - Aggregate Root

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::SheetId;

/// Novel 聚合根
///
/// 不变量:
/// - 只读，由远程表格创建和更新
/// - related_sheet_id 指向该小说的章节表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Novel {
    id: i64,
    title: String,
    related_sheet_id: SheetId,
    created_at: String,
    updated_at: String,
}

impl Novel {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        related_sheet_id: SheetId,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            related_sheet_id,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }

    // Getters
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn related_sheet_id(&self) -> &SheetId {
        &self.related_sheet_id
    }

    /// 远程返回的原始时间戳
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// 创建日期（仅日期部分，解析失败返回 None）
    pub fn created_on(&self) -> Option<NaiveDate> {
        parse_date(&self.created_at)
    }

    pub fn updated_on(&self) -> Option<NaiveDate> {
        parse_date(&self.updated_at)
    }
}

/// 解析远程时间戳
///
/// NocoDB 常见格式: `2024-05-01 10:20:30+00:00`，也接受 RFC 3339
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
