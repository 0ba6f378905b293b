//! Preferences HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{GetPreferenceOptions, GetPreferences, PreferencesResponse, UpdatePreference};
use crate::domain::reading::{PreferenceOptions, ReadingPreferences, ResolvedStyle};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 修改单个偏好字段
///
/// `value` 接受字符串或数字，例如 `{"key": "fontSize", "value": 20}`
#[derive(Debug, Deserialize)]
pub struct UpdatePreferenceRequest {
    pub key: String,
    pub value: Value,
}

#[derive(Debug, Serialize)]
pub struct PreferencesBody {
    pub preferences: ReadingPreferences,
    pub style: ResolvedStyle,
}

impl From<PreferencesResponse> for PreferencesBody {
    fn from(r: PreferencesResponse) -> Self {
        Self {
            preferences: r.preferences,
            style: r.style,
        }
    }
}

fn value_as_text(value: &Value) -> Result<String, ApiError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ApiError::BadRequest(format!(
            "preference value must be a string or number, got {}",
            other
        ))),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取当前阅读偏好
pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<PreferencesBody>>, ApiError> {
    let result = state.get_preferences_handler.handle(GetPreferences)?;

    Ok(Json(ApiResponse::success(PreferencesBody::from(result))))
}

/// 修改阅读偏好（立即持久化）
pub async fn update_preference(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdatePreferenceRequest>,
) -> Result<Json<ApiResponse<PreferencesBody>>, ApiError> {
    let command = UpdatePreference {
        value: value_as_text(&req.value)?,
        key: req.key,
    };

    let result = state.update_preference_handler.handle(command)?;

    Ok(Json(ApiResponse::success(PreferencesBody::from(result))))
}

/// 获取设置面板可选项
pub async fn get_preference_options(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<PreferenceOptions>> {
    Json(ApiResponse::success(
        state.get_preference_options_handler.handle(GetPreferenceOptions),
    ))
}
