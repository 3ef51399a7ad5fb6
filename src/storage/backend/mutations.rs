//! Write operations for SeaOrmStorage

use sea_orm::ActiveModelTrait;
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{model_to_log_entry, new_log_entry_to_active_model};
use crate::errors::{AppError, Result};
use crate::storage::{LogEntry, NewLogEntry};

impl SeaOrmStorage {
    /// 插入一条审计记录，返回带自增 id 的实体
    pub async fn insert_log_entry(&self, entry: NewLogEntry) -> Result<LogEntry> {
        let model = new_log_entry_to_active_model(&entry)
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to insert log entry: {}", e)))?;

        debug!(
            "Log entry {} stored for {} ({} countries)",
            model.id, model.username, model.num_countries_returned
        );
        Ok(model_to_log_entry(model))
    }
}
