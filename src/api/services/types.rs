//! API 类型定义

use serde::{Deserialize, Serialize};

/// 统一响应包
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// `GET /countries/top-density` 查询参数
#[derive(Deserialize, Clone, Debug)]
pub struct TopDensityQuery {
    pub count: i64,
}

/// `echo` 参数，query 与 JSON body 通用
#[derive(Deserialize, Clone, Debug, Default)]
pub struct EchoParams {
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStorageCheck {
    pub status: String,
    pub storage_type: String,
    pub log_entries: Option<u64>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub storage: HealthStorageCheck,
    pub response_time_ms: u32,
}
