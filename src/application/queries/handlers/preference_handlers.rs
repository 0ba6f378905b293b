//! Preference Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::preferences::ReadingPreferencesStore;
use crate::application::queries::{GetPreferenceOptions, GetPreferences};
use crate::domain::reading::{resolve_style, PreferenceOptions, ReadingPreferences, ResolvedStyle};

/// 阅读偏好响应
#[derive(Debug, Clone)]
pub struct PreferencesResponse {
    pub preferences: ReadingPreferences,
    pub style: ResolvedStyle,
}

impl From<ReadingPreferences> for PreferencesResponse {
    fn from(preferences: ReadingPreferences) -> Self {
        Self {
            style: resolve_style(&preferences),
            preferences,
        }
    }
}

/// GetPreferences Handler
pub struct GetPreferencesHandler {
    preferences: Arc<ReadingPreferencesStore>,
}

impl GetPreferencesHandler {
    pub fn new(preferences: Arc<ReadingPreferencesStore>) -> Self {
        Self { preferences }
    }

    pub fn handle(&self, _query: GetPreferences) -> Result<PreferencesResponse, ApplicationError> {
        Ok(PreferencesResponse::from(self.preferences.current()))
    }
}

/// GetPreferenceOptions Handler
#[derive(Default)]
pub struct GetPreferenceOptionsHandler;

impl GetPreferenceOptionsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: GetPreferenceOptions) -> PreferenceOptions {
        PreferenceOptions::new()
    }
}
