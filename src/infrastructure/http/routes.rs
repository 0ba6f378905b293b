//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                   GET   健康检查
//! - /api/novel/list                             GET   小说列表（第一页）
//! - /api/novel/:sheet_id/chapters               GET   已翻译章节列表
//! - /api/novel/:sheet_id/chapters/:chapter      GET   章节阅读视图
//! - /api/preferences                            GET   当前阅读偏好及排版参数
//! - /api/preferences/update                     POST  修改单个偏好字段
//! - /api/preferences/options                    GET   设置面板可选项

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/novel", novel_routes())
        .nest("/preferences", preference_routes())
}

/// Novel 路由
fn novel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_novels))
        .route("/:sheet_id/chapters", get(handlers::list_chapters))
        .route("/:sheet_id/chapters/:chapter", get(handlers::get_chapter))
}

/// Preferences 路由
fn preference_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::get_preferences))
        .route("/update", post(handlers::update_preference))
        .route("/options", get(handlers::get_preference_options))
}
