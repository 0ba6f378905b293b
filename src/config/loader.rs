//! Configuration Loader
//!
//! 来源按顺序叠加，后者覆盖前者：
//! `AppConfig::default()` → config.toml / config.local.toml → `LECTOR_*` 环境变量

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 可选配置文件（不含扩展名）
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "LECTOR";

/// 加载应用配置
///
/// 环境变量使用 `__` 分隔层级，例如：
/// - `LECTOR_SERVER__PORT=8080`
/// - `LECTOR_REMOTE__BASE_URL=https://noco.example.com`
/// - `LECTOR_REMOTE__TOKEN=...`
/// - `LECTOR_PREFERENCES__DB_PATH=/data/preferences.sled`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 加载配置；给定路径时该文件必须存在，并替代默认的文件搜索
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    // 默认值直接来自 AppConfig::default()，避免两处维护
    let defaults = Config::try_from(&AppConfig::default())?;
    let mut builder = Config::builder().add_source(defaults);

    builder = match config_path {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => CONFIG_FILE_NAMES.iter().fold(builder, |b, name| {
            b.add_source(File::with_name(name).required(false))
        }),
    };

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 校验配置，一次报告所有问题
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let checks = [
        (config.server.port == 0, "server.port must not be 0"),
        (
            config.remote.base_url.trim().is_empty(),
            "remote.base_url must not be empty",
        ),
        (
            config.remote.novels_table.trim().is_empty(),
            "remote.novels_table must not be empty",
        ),
        (config.remote.timeout_secs == 0, "remote.timeout_secs must not be 0"),
        (
            config.preferences.db_path.is_empty(),
            "preferences.db_path must not be empty",
        ),
        (
            config.preferences.storage_key.is_empty(),
            "preferences.storage_key must not be empty",
        ),
    ];

    let problems: Vec<&str> = checks
        .iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, message)| *message)
        .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(problems.join("; ")))
    }
}

/// 令牌只显示是否已配置
fn redact(token: &str) -> &'static str {
    if token.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

/// 启动时输出生效配置
pub fn print_config(config: &AppConfig) {
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Server"
    );
    tracing::info!(
        base_url = %config.remote.base_url,
        token = redact(&config.remote.token),
        novels_table = %config.remote.novels_table,
        timeout_secs = config.remote.timeout_secs,
        "Remote table API"
    );
    tracing::info!(
        db_path = %config.preferences.db_path,
        storage_key = %config.preferences.storage_key,
        "Reading preferences"
    );
    tracing::info!(level = %config.log.level, json = config.log.json, "Logging");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn zero_port_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn blank_remote_url_rejected() {
        let mut config = AppConfig::default();
        config.remote.base_url = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn all_problems_reported_together() {
        let mut config = AppConfig::default();
        config.remote.novels_table = String::new();
        config.remote.timeout_secs = 0;

        let Err(ConfigError::ValidationError(message)) = validate_config(&config) else {
            panic!("expected validation error");
        };
        assert!(message.contains("remote.novels_table"));
        assert!(message.contains("remote.timeout_secs"));
    }

    #[test]
    fn token_is_redacted() {
        assert_eq!(redact(""), "<unset>");
        assert_eq!(redact("secret"), "<redacted>");
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9001

[remote]
base_url = "https://noco.example.com"
token = "abc"
novels_table = "m123"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.remote.base_url, "https://noco.example.com");
        assert_eq!(config.remote.token, "abc");
        assert_eq!(config.remote.novels_table, "m123");
        assert_eq!(config.remote.timeout_secs, 30);
        assert_eq!(config.preferences.storage_key, "novelReadingSettings");
    }
}
