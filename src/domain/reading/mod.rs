//! Reading Context - 阅读偏好限界上下文
//!
//! 职责:
//! - 阅读偏好记录及单字段更新
//! - 偏好到排版参数的映射（Style Resolver）

mod errors;
mod preferences;
mod style;

pub use errors::PreferenceError;
pub use preferences::{
    FontFamily, FontSize, FontSizeRange, LetterSpacing, LineHeight, PreferenceKey,
    PreferenceOptions, PreferenceUpdate, ReadingPreferences,
};
pub use style::{resolve_style, ResolvedStyle};
