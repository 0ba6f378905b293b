//! Reading Preferences Store
//!
//! 会话内持有当前阅读偏好，并与本地持久化存储保持同步。
//!
//! 失败策略:
//! - 读取失败/数据损坏: 记录日志，回退到默认记录
//! - 写入失败: 记录日志，内存中的记录仍然有效

use serde::Deserialize;
use serde_json::Value;
use std::sync::{Arc, RwLock};

use crate::application::ports::PreferencesStoragePort;
use crate::domain::reading::{
    FontFamily, FontSize, LetterSpacing, LineHeight, PreferenceUpdate, ReadingPreferences,
};

/// 持久化键
pub const PREFERENCES_STORAGE_KEY: &str = "novelReadingSettings";

/// 存储中的原始记录，各字段独立解析
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreferences {
    font_size: Option<Value>,
    font_family: Option<Value>,
    line_height: Option<Value>,
    letter_spacing: Option<Value>,
}

/// 阅读偏好存储句柄
pub struct ReadingPreferencesStore {
    storage: Arc<dyn PreferencesStoragePort>,
    key: String,
    current: RwLock<ReadingPreferences>,
}

impl ReadingPreferencesStore {
    /// 创建句柄并加载一次持久化记录
    pub fn new(storage: Arc<dyn PreferencesStoragePort>) -> Self {
        Self::with_key(storage, PREFERENCES_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn PreferencesStoragePort>, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = load_from(storage.as_ref(), &key);
        Self {
            storage,
            key,
            current: RwLock::new(initial),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 从存储读取记录，任何失败都返回默认记录
    pub fn load(&self) -> ReadingPreferences {
        load_from(self.storage.as_ref(), &self.key)
    }

    /// 替换恰好一个字段
    pub fn update(prefs: ReadingPreferences, update: PreferenceUpdate) -> ReadingPreferences {
        prefs.with_update(update)
    }

    /// 序列化完整记录并写入存储，失败只记录日志
    pub fn persist(&self, prefs: &ReadingPreferences) {
        let serialized = match serde_json::to_string(prefs) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to serialize reading preferences");
                return;
            }
        };

        match self.storage.write(&self.key, &serialized) {
            Ok(()) => tracing::debug!(key = %self.key, "Reading preferences persisted"),
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to persist reading preferences")
            }
        }
    }

    /// 当前会话中的记录
    pub fn current(&self) -> ReadingPreferences {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    /// update + persist，并替换内存中的记录
    pub fn apply(&self, update: PreferenceUpdate) -> ReadingPreferences {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let updated = Self::update(*guard, update);
        self.persist(&updated);
        *guard = updated;

        tracing::info!(
            key = update.key().as_str(),
            value = %update.value_string(),
            "Reading preference updated"
        );

        updated
    }
}

fn load_from(storage: &dyn PreferencesStoragePort, key: &str) -> ReadingPreferences {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = %key, "No stored reading preferences, using defaults");
            return ReadingPreferences::default();
        }
        Err(e) => {
            tracing::error!(key = %key, error = %e, "Error reading reading preferences from storage");
            return ReadingPreferences::default();
        }
    };

    match decode_record(&raw) {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::error!(key = %key, error = %e, "Stored reading preferences are malformed, using defaults");
            ReadingPreferences::default()
        }
    }
}

/// 解码存储记录
///
/// 非 JSON 对象整体回退为默认值；单个字段无法识别时只回退该字段
fn decode_record(raw: &str) -> Result<ReadingPreferences, serde_json::Error> {
    let stored: StoredPreferences = serde_json::from_str(raw)?;
    let defaults = ReadingPreferences::default();

    Ok(ReadingPreferences {
        font_size: decode_field("fontSize", stored.font_size, defaults.font_size, |v| {
            v.as_i64().and_then(|n| FontSize::new(n).ok())
        }),
        font_family: decode_field("fontFamily", stored.font_family, defaults.font_family, |v| {
            v.as_str().and_then(|s| s.parse::<FontFamily>().ok())
        }),
        line_height: decode_field("lineHeight", stored.line_height, defaults.line_height, |v| {
            v.as_str().and_then(|s| s.parse::<LineHeight>().ok())
        }),
        letter_spacing: decode_field(
            "letterSpacing",
            stored.letter_spacing,
            defaults.letter_spacing,
            |v| v.as_str().and_then(|s| s.parse::<LetterSpacing>().ok()),
        ),
    })
}

fn decode_field<T>(
    name: &'static str,
    value: Option<Value>,
    default: T,
    parse: impl FnOnce(&Value) -> Option<T>,
) -> T {
    let Some(value) = value else {
        return default;
    };
    match parse(&value) {
        Some(parsed) => parsed,
        None => {
            tracing::warn!(field = name, value = %value, "Unrecognized stored preference value, using default");
            default
        }
    }
}
