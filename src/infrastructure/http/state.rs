//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    UpdatePreferenceHandler,
    // Query handlers
    GetChapterHandler, GetPreferenceOptionsHandler, GetPreferencesHandler, ListChaptersHandler,
    ListNovelsHandler,
    // Ports
    NovelSourcePort, ReadingPreferencesStore,
};

/// 应用状态
///
/// 偏好存储句柄在所有请求间共享
pub struct AppState {
    // ========== Command Handlers ==========
    pub update_preference_handler: UpdatePreferenceHandler,

    // ========== Query Handlers ==========
    pub list_novels_handler: ListNovelsHandler,
    pub list_chapters_handler: ListChaptersHandler,
    pub get_chapter_handler: GetChapterHandler,
    pub get_preferences_handler: GetPreferencesHandler,
    pub get_preference_options_handler: GetPreferenceOptionsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        novel_source: Arc<dyn NovelSourcePort>,
        preferences: Arc<ReadingPreferencesStore>,
    ) -> Self {
        Self {
            // Command handlers
            update_preference_handler: UpdatePreferenceHandler::new(preferences.clone()),

            // Query handlers
            list_novels_handler: ListNovelsHandler::new(novel_source.clone()),
            list_chapters_handler: ListChaptersHandler::new(novel_source.clone()),
            get_chapter_handler: GetChapterHandler::new(novel_source.clone(), preferences.clone()),
            get_preferences_handler: GetPreferencesHandler::new(preferences.clone()),
            get_preference_options_handler: GetPreferenceOptionsHandler::new(),
        }
    }
}
