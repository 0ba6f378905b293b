//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

use super::NovelError;

/// 章节表标识（远程表格 ID）
///
/// 小说通过 related_sheet_id 寻址，同时作为远程 URL 路径的一段
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetId(String);

impl SheetId {
    pub fn new(id: impl Into<String>) -> Result<Self, NovelError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(NovelError::InvalidSheetId("sheet id cannot be empty".to_string()));
        }
        if trimmed.contains('/') || trimmed.contains('?') || trimmed.contains('#') {
            return Err(NovelError::InvalidSheetId(format!(
                "sheet id contains reserved characters: {}",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 远程过滤表达式 `(Field,eq,value)` 的语法字符，不能出现在编号中
const FILTER_RESERVED: &[char] = &[',', '(', ')', '~'];

/// 章节编号
///
/// 远程表中以字符串保存的数字；上一章/下一章按整数计算
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterNumber(String);

impl ChapterNumber {
    pub fn new(number: impl Into<String>) -> Result<Self, NovelError> {
        let number = number.into();
        let trimmed = number.trim();
        if trimmed.is_empty() {
            return Err(NovelError::InvalidChapterNumber(
                "chapter number cannot be empty".to_string(),
            ));
        }
        if trimmed.contains(FILTER_RESERVED) || trimmed.chars().any(char::is_control) {
            return Err(NovelError::InvalidChapterNumber(format!(
                "chapter number contains reserved characters: {}",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_integer(number: u32) -> Self {
        Self(number.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 整数形式，非数字编号返回 None
    pub fn as_integer(&self) -> Option<u32> {
        self.0.parse().ok()
    }

    /// 上一章：第 1 章及以下没有上一章
    pub fn previous(&self) -> Option<ChapterNumber> {
        match self.as_integer() {
            Some(n) if n > 1 => Some(Self::from_integer(n - 1)),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<ChapterNumber> {
        self.as_integer()
            .and_then(|n| n.checked_add(1))
            .map(Self::from_integer)
    }
}

impl std::fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_id_rejects_empty() {
        assert!(SheetId::new("").is_err());
        assert!(SheetId::new("   ").is_err());
    }

    #[test]
    fn test_sheet_id_rejects_path_characters() {
        assert!(SheetId::new("abc/def").is_err());
        assert!(SheetId::new("abc?x=1").is_err());
    }

    #[test]
    fn test_sheet_id_trims() {
        let id = SheetId::new(" m1x2y3 ").unwrap();
        assert_eq!(id.as_str(), "m1x2y3");
    }

    #[test]
    fn test_chapter_number_rejects_filter_syntax() {
        for raw in ["1),~or(Status,eq,Draft", "1,2", "(1)", "~not", "1\n2"] {
            assert!(
                matches!(ChapterNumber::new(raw), Err(NovelError::InvalidChapterNumber(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_chapter_number_allows_plain_labels() {
        assert_eq!(ChapterNumber::new(" 12 ").unwrap().as_str(), "12");
        assert_eq!(ChapterNumber::new("12.5").unwrap().as_str(), "12.5");
        assert_eq!(ChapterNumber::new("Side Story").unwrap().as_str(), "Side Story");
    }

    #[test]
    fn test_first_chapter_has_no_previous() {
        let chapter = ChapterNumber::new("1").unwrap();
        assert_eq!(chapter.previous(), None);
        assert_eq!(chapter.next().unwrap().as_str(), "2");
    }

    #[test]
    fn test_middle_chapter_navigation() {
        let chapter = ChapterNumber::new("5").unwrap();
        assert_eq!(chapter.previous().unwrap().as_str(), "4");
        assert_eq!(chapter.next().unwrap().as_str(), "6");
    }

    #[test]
    fn test_non_numeric_chapter_has_no_navigation() {
        let chapter = ChapterNumber::new("prologue").unwrap();
        assert_eq!(chapter.as_integer(), None);
        assert_eq!(chapter.previous(), None);
        assert_eq!(chapter.next(), None);
    }

    #[test]
    fn test_chapter_zero_has_no_previous() {
        let chapter = ChapterNumber::new("0").unwrap();
        assert_eq!(chapter.previous(), None);
        assert_eq!(chapter.next().unwrap().as_str(), "1");
    }
}
