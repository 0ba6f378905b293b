//! Reading Context - 阅读偏好
//!
//! 四项排版设置：字号、字体、行高、字间距。
//! 字体/行高/字间距为封闭枚举，无法表示未知取值

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::PreferenceError;

/// 字号（像素），范围 [14, 32]，步长 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    pub const MIN: u32 = 14;
    pub const MAX: u32 = 32;
    pub const STEP: u32 = 1;
    pub const DEFAULT: u32 = 18;

    /// 越界的值直接拒绝，不做截断
    pub fn new(value: i64) -> Result<Self, PreferenceError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(PreferenceError::FontSizeOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    /// 解析输入框中的文本
    pub fn parse(input: &str) -> Result<Self, PreferenceError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| PreferenceError::FontSizeNotANumber(input.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for FontSize {
    type Error = PreferenceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

/// 为封闭枚举生成 as_str / FromStr / ALL
macro_rules! preference_enum {
    ($name:ident, $key:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn keys() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl FromStr for $name {
            type Err = PreferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok($name::$variant),)+
                    other => Err(PreferenceError::UnknownValue {
                        key: $key,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// 字体
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Inter,
    Bookerly,
}

preference_enum!(FontFamily, "fontFamily", {
    Inter => "inter",
    Bookerly => "bookerly",
});

/// 行高
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineHeight {
    Tight,
    Normal,
    #[default]
    Relaxed,
}

preference_enum!(LineHeight, "lineHeight", {
    Tight => "tight",
    Normal => "normal",
    Relaxed => "relaxed",
});

/// 字间距
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSpacing {
    Tight,
    #[default]
    Normal,
    Wide,
}

preference_enum!(LetterSpacing, "letterSpacing", {
    Tight => "tight",
    Normal => "normal",
    Wide => "wide",
});

/// 阅读偏好记录
///
/// 默认值: `{fontSize:18, fontFamily:"inter", lineHeight:"relaxed", letterSpacing:"normal"}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPreferences {
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
}

impl ReadingPreferences {
    /// 替换恰好一个字段，其余保持不变
    pub fn with_update(mut self, update: PreferenceUpdate) -> Self {
        match update {
            PreferenceUpdate::FontSize(v) => self.font_size = v,
            PreferenceUpdate::FontFamily(v) => self.font_family = v,
            PreferenceUpdate::LineHeight(v) => self.line_height = v,
            PreferenceUpdate::LetterSpacing(v) => self.letter_spacing = v,
        }
        self
    }
}

/// 偏好字段名（与持久化 JSON 的字段名一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    FontSize,
    FontFamily,
    LineHeight,
    LetterSpacing,
}

impl PreferenceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::FontSize => "fontSize",
            PreferenceKey::FontFamily => "fontFamily",
            PreferenceKey::LineHeight => "lineHeight",
            PreferenceKey::LetterSpacing => "letterSpacing",
        }
    }
}

impl FromStr for PreferenceKey {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fontSize" => Ok(PreferenceKey::FontSize),
            "fontFamily" => Ok(PreferenceKey::FontFamily),
            "lineHeight" => Ok(PreferenceKey::LineHeight),
            "letterSpacing" => Ok(PreferenceKey::LetterSpacing),
            other => Err(PreferenceError::UnknownKey(other.to_string())),
        }
    }
}

/// 单字段更新
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceUpdate {
    FontSize(FontSize),
    FontFamily(FontFamily),
    LineHeight(LineHeight),
    LetterSpacing(LetterSpacing),
}

impl PreferenceUpdate {
    /// 从字段名和文本值构造更新，非法值在此被拒绝
    pub fn parse(key: &str, value: &str) -> Result<Self, PreferenceError> {
        let update = match key.parse::<PreferenceKey>()? {
            PreferenceKey::FontSize => PreferenceUpdate::FontSize(FontSize::parse(value)?),
            PreferenceKey::FontFamily => PreferenceUpdate::FontFamily(value.parse()?),
            PreferenceKey::LineHeight => PreferenceUpdate::LineHeight(value.parse()?),
            PreferenceKey::LetterSpacing => PreferenceUpdate::LetterSpacing(value.parse()?),
        };
        Ok(update)
    }

    pub fn key(&self) -> PreferenceKey {
        match self {
            PreferenceUpdate::FontSize(_) => PreferenceKey::FontSize,
            PreferenceUpdate::FontFamily(_) => PreferenceKey::FontFamily,
            PreferenceUpdate::LineHeight(_) => PreferenceKey::LineHeight,
            PreferenceUpdate::LetterSpacing(_) => PreferenceKey::LetterSpacing,
        }
    }

    pub fn value_string(&self) -> String {
        match self {
            PreferenceUpdate::FontSize(v) => v.value().to_string(),
            PreferenceUpdate::FontFamily(v) => v.to_string(),
            PreferenceUpdate::LineHeight(v) => v.to_string(),
            PreferenceUpdate::LetterSpacing(v) => v.to_string(),
        }
    }
}

/// 字号范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSizeRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

/// 设置面板可选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceOptions {
    pub font_size: FontSizeRange,
    pub font_families: Vec<&'static str>,
    pub line_heights: Vec<&'static str>,
    pub letter_spacings: Vec<&'static str>,
}

impl PreferenceOptions {
    pub fn new() -> Self {
        Self {
            font_size: FontSizeRange {
                min: FontSize::MIN,
                max: FontSize::MAX,
                step: FontSize::STEP,
            },
            font_families: FontFamily::keys(),
            line_heights: LineHeight::keys(),
            letter_spacings: LetterSpacing::keys(),
        }
    }
}

impl Default for PreferenceOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let prefs = ReadingPreferences::default();
        assert_eq!(prefs.font_size.value(), 18);
        assert_eq!(prefs.font_family, FontFamily::Inter);
        assert_eq!(prefs.line_height, LineHeight::Relaxed);
        assert_eq!(prefs.letter_spacing, LetterSpacing::Normal);
    }

    #[test]
    fn test_default_record_json_shape() {
        let json = serde_json::to_value(ReadingPreferences::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fontSize": 18,
                "fontFamily": "inter",
                "lineHeight": "relaxed",
                "letterSpacing": "normal"
            })
        );
    }

    #[test]
    fn test_font_size_bounds() {
        assert!(FontSize::new(14).is_ok());
        assert!(FontSize::new(32).is_ok());
        assert_eq!(
            FontSize::new(13),
            Err(PreferenceError::FontSizeOutOfRange {
                value: 13,
                min: 14,
                max: 32
            })
        );
        assert!(FontSize::new(33).is_err());
        assert!(FontSize::new(-1).is_err());
    }

    #[test]
    fn test_font_size_parse_input() {
        assert_eq!(FontSize::parse(" 20 ").unwrap().value(), 20);
        assert!(matches!(
            FontSize::parse("abc"),
            Err(PreferenceError::FontSizeNotANumber(_))
        ));
        assert!(FontSize::parse("99").is_err());
    }

    #[test]
    fn test_font_size_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<FontSize>("40").is_err());
        assert_eq!(serde_json::from_str::<FontSize>("22").unwrap().value(), 22);
    }

    #[test]
    fn test_update_replaces_exactly_one_field() {
        let base = ReadingPreferences::default();
        let updated = base.with_update(PreferenceUpdate::LineHeight(LineHeight::Tight));

        assert_eq!(updated.line_height, LineHeight::Tight);
        assert_eq!(updated.font_size, base.font_size);
        assert_eq!(updated.font_family, base.font_family);
        assert_eq!(updated.letter_spacing, base.letter_spacing);
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            PreferenceUpdate::parse("fontFamily", "bookerly").unwrap(),
            PreferenceUpdate::FontFamily(FontFamily::Bookerly)
        );
        assert_eq!(
            PreferenceUpdate::parse("fontSize", "24").unwrap(),
            PreferenceUpdate::FontSize(FontSize::new(24).unwrap())
        );
        assert!(matches!(
            PreferenceUpdate::parse("fontColor", "red"),
            Err(PreferenceError::UnknownKey(_))
        ));
        assert!(matches!(
            PreferenceUpdate::parse("letterSpacing", "huge"),
            Err(PreferenceError::UnknownValue { key: "letterSpacing", .. })
        ));
    }

    #[test]
    fn test_options_lists_all_keys_in_order() {
        let options = PreferenceOptions::new();
        assert_eq!(options.font_families, vec!["inter", "bookerly"]);
        assert_eq!(options.line_heights, vec!["tight", "normal", "relaxed"]);
        assert_eq!(options.letter_spacings, vec!["tight", "normal", "wide"]);
        assert_eq!(options.font_size.min, 14);
        assert_eq!(options.font_size.max, 32);
    }
}
