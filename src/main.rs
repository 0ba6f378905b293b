//! Lector - 小说阅读服务
//!
//! 启动流程：配置 → 日志 → 偏好存储 → 远程表格客户端 → HTTP 服务器

use std::sync::Arc;

use lector::application::ReadingPreferencesStore;
use lector::config::{load_config, print_config, LogConfig};
use lector::infrastructure::adapters::{NocoClientConfig, NocoTableClient};
use lector::infrastructure::http::{AppState, HttpServer};
use lector::infrastructure::persistence::{open_preferences_storage, SledPreferencesConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},lector={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Lector - 小说阅读服务");
    print_config(&config);

    // 数据目录创建失败时由下面的存储回退处理
    if let Some(parent) = std::path::Path::new(&config.preferences.db_path).parent() {
        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            tracing::warn!(dir = %parent.display(), error = %e, "Failed to create data directory");
        }
    }

    // 阅读偏好：Sled 存储（不可用时退回内存）+ 启动时加载一次
    let storage = open_preferences_storage(&SledPreferencesConfig {
        db_path: config.preferences.db_path.clone(),
    });
    let preferences = Arc::new(ReadingPreferencesStore::with_key(
        storage,
        config.preferences.storage_key.clone(),
    ));

    // 远程表格客户端
    let noco_config = NocoClientConfig::new(&config.remote.base_url, &config.remote.novels_table)
        .with_token(&config.remote.token)
        .with_timeout(config.remote.timeout_secs);
    let novel_source = Arc::new(NocoTableClient::new(noco_config)?);

    let state = AppState::new(novel_source, preferences);
    let server = HttpServer::new(&config.server, state);

    tracing::info!("Starting HTTP server...");

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
