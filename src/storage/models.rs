use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一次排名请求的审计记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: i64,
    pub username: String,
    pub request_timestamp: DateTime<Utc>,
    pub num_countries_returned: i32,
    /// JSON 编码的 `[{name, density}, ...]`
    pub countries_details: String,
}

/// 待写入的审计记录（id 由数据库分配）
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub username: String,
    pub request_timestamp: DateTime<Utc>,
    pub num_countries_returned: i32,
    pub countries_details: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
}
