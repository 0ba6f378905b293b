//! Noco Adapter - 远程表格 API 客户端实现

mod noco_client;

pub use noco_client::*;
