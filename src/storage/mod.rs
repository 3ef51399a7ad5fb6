//! Audit log persistence

use std::sync::Arc;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{LogEntry, NewLogEntry, StorageConfig};

pub struct StorageFactory;

impl StorageFactory {
    /// Storage for `database.database_url`, backend inferred from the URL
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        let url = config.database.database_url.as_str();

        let backend = backend::infer_backend_from_url(url)?;
        SeaOrmStorage::new(url, &backend).await.map(Arc::new)
    }
}
