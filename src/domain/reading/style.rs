//! Style Resolver - 偏好到排版参数的纯映射

use serde::Serialize;

use super::{FontFamily, LetterSpacing, LineHeight, ReadingPreferences};

impl FontFamily {
    pub fn font_stack(&self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', sans-serif",
            FontFamily::Bookerly => "'Bookerly', serif",
        }
    }
}

impl LineHeight {
    pub fn multiplier(&self) -> f64 {
        match self {
            LineHeight::Tight => 1.2,
            LineHeight::Normal => 1.5,
            LineHeight::Relaxed => 1.75,
        }
    }
}

impl LetterSpacing {
    pub fn css_value(&self) -> &'static str {
        match self {
            LetterSpacing::Tight => "-0.025em",
            LetterSpacing::Normal => "0em",
            LetterSpacing::Wide => "0.05em",
        }
    }
}

/// 可直接渲染的排版参数
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    /// 字号（像素）
    pub font_size_px: u32,
    /// CSS 形式，如 "18px"
    pub font_size: String,
    pub font_family: &'static str,
    pub line_height: f64,
    pub letter_spacing: &'static str,
}

pub fn resolve_style(prefs: &ReadingPreferences) -> ResolvedStyle {
    let px = prefs.font_size.value();
    ResolvedStyle {
        font_size_px: px,
        font_size: format!("{}px", px),
        font_family: prefs.font_family.font_stack(),
        line_height: prefs.line_height.multiplier(),
        letter_spacing: prefs.letter_spacing.css_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::FontSize;

    #[test]
    fn test_font_family_table() {
        assert_eq!(FontFamily::Inter.font_stack(), "'Inter', sans-serif");
        assert_eq!(FontFamily::Bookerly.font_stack(), "'Bookerly', serif");
    }

    #[test]
    fn test_line_height_table() {
        assert_eq!(LineHeight::Tight.multiplier(), 1.2);
        assert_eq!(LineHeight::Normal.multiplier(), 1.5);
        assert_eq!(LineHeight::Relaxed.multiplier(), 1.75);
    }

    #[test]
    fn test_letter_spacing_table() {
        assert_eq!(LetterSpacing::Tight.css_value(), "-0.025em");
        assert_eq!(LetterSpacing::Normal.css_value(), "0em");
        assert_eq!(LetterSpacing::Wide.css_value(), "0.05em");
    }

    #[test]
    fn test_resolve_default() {
        let style = resolve_style(&ReadingPreferences::default());
        assert_eq!(style.font_size_px, 18);
        assert_eq!(style.font_size, "18px");
        assert_eq!(style.font_family, "'Inter', sans-serif");
        assert_eq!(style.line_height, 1.75);
        assert_eq!(style.letter_spacing, "0em");
    }

    #[test]
    fn test_resolve_custom() {
        let prefs = ReadingPreferences {
            font_size: FontSize::new(24).unwrap(),
            font_family: FontFamily::Bookerly,
            line_height: LineHeight::Tight,
            letter_spacing: LetterSpacing::Wide,
        };
        let style = resolve_style(&prefs);
        assert_eq!(style.font_size, "24px");
        assert_eq!(style.font_family, "'Bookerly', serif");
        assert_eq!(style.line_height, 1.2);
        assert_eq!(style.letter_spacing, "0.05em");
    }
}
