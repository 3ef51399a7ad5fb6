use crate::storage::{LogEntry, NewLogEntry};
use migration::entities::log_entry;

/// 将 Sea-ORM Model 转换为 LogEntry
pub fn model_to_log_entry(model: log_entry::Model) -> LogEntry {
    LogEntry {
        id: model.id,
        username: model.username,
        request_timestamp: model.request_timestamp,
        num_countries_returned: model.num_countries_returned,
        countries_details: model.countries_details,
    }
}

/// 将 NewLogEntry 转换为 ActiveModel，id 留给数据库自增
pub fn new_log_entry_to_active_model(entry: &NewLogEntry) -> log_entry::ActiveModel {
    use sea_orm::ActiveValue::*;

    log_entry::ActiveModel {
        id: NotSet,
        username: Set(entry.username.clone()),
        request_timestamp: Set(entry.request_timestamp),
        num_countries_returned: Set(entry.num_countries_returned),
        countries_details: Set(entry.countries_details.clone()),
    }
}
