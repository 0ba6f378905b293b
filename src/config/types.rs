//! Configuration Types
//!
//! 定义所有配置结构体

use serde::{Deserialize, Serialize};

use crate::application::PREFERENCES_STORAGE_KEY;

/// 应用主配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 远程表格 API 配置
    #[serde(default)]
    pub remote: RemoteConfig,

    /// 阅读偏好存储配置
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 远程表格 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// 服务基础 URL
    #[serde(default = "default_remote_url")]
    pub base_url: String,

    /// 静态访问令牌（xc-token）
    #[serde(default)]
    pub token: String,

    /// 小说列表表 ID
    #[serde(default = "default_novels_table")]
    pub novels_table: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_remote_timeout")]
    pub timeout_secs: u64,
}

fn default_remote_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_novels_table() -> String {
    "novels".to_string()
}

fn default_remote_timeout() -> u64 {
    30
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_remote_url(),
            token: String::new(),
            novels_table: default_novels_table(),
            timeout_secs: default_remote_timeout(),
        }
    }
}

/// 阅读偏好存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Sled 数据库路径
    #[serde(default = "default_preferences_db")]
    pub db_path: String,

    /// 偏好记录的存储键
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_preferences_db() -> String {
    "data/preferences.sled".to_string()
}

fn default_storage_key() -> String {
    PREFERENCES_STORAGE_KEY.to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            db_path: default_preferences_db(),
            storage_key: default_storage_key(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
