//! Preference Queries

/// 获取当前阅读偏好及排版参数
#[derive(Debug, Clone)]
pub struct GetPreferences;

/// 获取设置面板可选项
#[derive(Debug, Clone)]
pub struct GetPreferenceOptions;
