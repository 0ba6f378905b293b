//! HTTP Server
//!
//! 组装中间件并监听端口

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 路由 + 中间件
///
/// 测试直接对返回的 Router 调用 `oneshot`
pub fn build_router(state: Arc<AppState>) -> Router {
    // 阅读前端可能与 API 不同源；接口只读或 JSON POST
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    create_routes()
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            addr: config.addr(),
            router: build_router(Arc::new(state)),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// 监听直到 `shutdown` 完成，处理中的请求会先结束
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.addr).await?;
        tracing::info!(addr = %self.addr, "HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
