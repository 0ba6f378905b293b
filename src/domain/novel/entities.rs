//! Novel Context - Entities

use serde::{Deserialize, Serialize};

use super::{ChapterNumber, Novel};
use crate::domain::split_paragraphs;

/// 分页信息（远程表格返回，不做客户端校验）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_rows: u64,
    pub page: u64,
    pub page_size: u64,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl PageInfo {
    /// 总页数 = ceil(total_rows / page_size)，page_size 为 0 时返回 0
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_rows.div_ceil(self.page_size)
    }
}

/// 小说列表页
#[derive(Debug, Clone, PartialEq)]
pub struct NovelsPage {
    pub novels: Vec<Novel>,
    pub page_info: PageInfo,
}

/// 章节列表项
///
/// 顺序保持远程返回的顺序，不做排序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterListItem {
    number: ChapterNumber,
    title: String,
}

impl ChapterListItem {
    pub fn new(number: ChapterNumber, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }

    pub fn number(&self) -> &ChapterNumber {
        &self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// 章节详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDetail {
    number: ChapterNumber,
    title: Option<String>,
    text: String,
}

impl ChapterDetail {
    pub fn new(number: ChapterNumber, title: Option<String>, text: impl Into<String>) -> Self {
        Self {
            number,
            title: title.filter(|t| !t.trim().is_empty()),
            text: text.into(),
        }
    }

    pub fn number(&self) -> &ChapterNumber {
        &self.number
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// 展示用标题，缺失时回退为 "Chapter {n}"
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Chapter {}", self.number),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn paragraphs(&self) -> Vec<String> {
        split_paragraphs(&self.text)
    }

    pub fn previous(&self) -> Option<ChapterNumber> {
        self.number.previous()
    }

    pub fn next(&self) -> Option<ChapterNumber> {
        self.number.next()
    }
}
