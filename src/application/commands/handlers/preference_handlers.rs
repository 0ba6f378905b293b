//! Preference Command Handlers

use std::sync::Arc;

use crate::application::commands::UpdatePreference;
use crate::application::error::ApplicationError;
use crate::application::preferences::ReadingPreferencesStore;
use crate::application::queries::handlers::PreferencesResponse;
use crate::domain::reading::PreferenceUpdate;

/// UpdatePreference Handler
///
/// 输入在此解析：越界字号或未知取值被拒绝，不会写入存储
pub struct UpdatePreferenceHandler {
    preferences: Arc<ReadingPreferencesStore>,
}

impl UpdatePreferenceHandler {
    pub fn new(preferences: Arc<ReadingPreferencesStore>) -> Self {
        Self { preferences }
    }

    pub fn handle(&self, command: UpdatePreference) -> Result<PreferencesResponse, ApplicationError> {
        let update = PreferenceUpdate::parse(&command.key, &command.value).map_err(|e| {
            tracing::warn!(key = %command.key, value = %command.value, error = %e, "Rejected preference update");
            ApplicationError::from(e)
        })?;

        let updated = self.preferences.apply(update);
        Ok(PreferencesResponse::from(updated))
    }
}
