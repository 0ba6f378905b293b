//! Preference Commands

/// 修改单个阅读偏好字段
///
/// `value` 为原始输入文本，由处理器解析和校验
#[derive(Debug, Clone)]
pub struct UpdatePreference {
    pub key: String,
    pub value: String,
}
