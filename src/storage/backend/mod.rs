//! SeaORM storage backend
//!
//! Audit log persistence on SQLite, MySQL/MariaDB or PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::{AppError, Result};
use crate::storage::models::StorageConfig;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_log_entry, new_log_entry_to_active_model};

/// URL scheme prefixes and the backend each selects
const SCHEME_BACKENDS: &[(&str, &str)] = &[
    ("sqlite:", "sqlite"),
    ("mysql://", "mysql"),
    ("mariadb://", "mysql"),
    ("postgres://", "postgres"),
    ("postgresql://", "postgres"),
];

/// Bare paths with these extensions are SQLite files
const SQLITE_EXTENSIONS: &[&str] = &[".db", ".sqlite", ".sqlite3"];

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    let by_scheme = SCHEME_BACKENDS
        .iter()
        .find(|(scheme, _)| database_url.starts_with(scheme))
        .map(|(_, backend)| *backend);

    let is_sqlite_path = database_url == ":memory:"
        || SQLITE_EXTENSIONS
            .iter()
            .any(|ext| database_url.ends_with(ext));

    match by_scheme {
        Some(backend) => Ok(backend.to_string()),
        None if is_sqlite_path => Ok("sqlite".to_string()),
        None => Err(AppError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        ))),
    }
}

/// MariaDB shares the MySQL driver
pub fn normalize_backend_name(backend: &str) -> String {
    if backend.eq_ignore_ascii_case("mariadb") {
        "mysql".to_string()
    } else {
        backend.to_ascii_lowercase()
    }
}

/// Audit log store over a SeaORM connection
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    /// Connect and migrate. The schema is current once this returns.
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.trim().is_empty() {
            return Err(AppError::database_config("database_url is empty"));
        }

        let backend_name = normalize_backend_name(backend_name);
        let db = match backend_name.as_str() {
            "sqlite" => connect_sqlite(database_url).await?,
            "mysql" | "postgres" => {
                let pool_size = crate::config::get_config().database.pool_size;
                connect_generic(database_url, &backend_name, pool_size).await?
            }
            other => {
                return Err(AppError::database_config(format!(
                    "Unsupported storage backend: {}",
                    other
                )));
            }
        };

        run_migrations(&db).await?;
        info!("{} audit log storage ready", backend_name);

        Ok(Self { db, backend_name })
    }

    pub fn get_backend_config(&self) -> StorageConfig {
        StorageConfig {
            storage_type: self.backend_name.clone(),
        }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
