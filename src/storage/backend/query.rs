//! Read-only operations for SeaOrmStorage

use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use super::SeaOrmStorage;
use super::converters::model_to_log_entry;
use crate::errors::{AppError, Result};
use crate::storage::LogEntry;

use migration::entities::log_entry;

impl SeaOrmStorage {
    /// 按插入顺序返回全部审计记录
    pub async fn list_log_entries(&self) -> Result<Vec<LogEntry>> {
        let models = log_entry::Entity::find()
            .order_by_asc(log_entry::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to load log entries: {}", e)))?;

        Ok(models.into_iter().map(model_to_log_entry).collect())
    }

    /// 审计记录总数（健康检查使用）
    pub async fn count(&self) -> Result<u64> {
        log_entry::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to count log entries: {}", e)))
    }
}
