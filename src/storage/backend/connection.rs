//! Connection setup and schema migration

use std::str::FromStr;
use std::time::Duration;

use sea_orm::sqlx::SqlitePool;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::{debug, info};

use crate::errors::{AppError, Result};
use migration::{Migrator, MigratorTrait};

const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(8);

/// SQLite file database, created on first use, WAL journal
pub async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::database_config(format!("Invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(SQLITE_BUSY_TIMEOUT);

    let pool = SqlitePool::connect_with(options).await.map_err(|e| {
        AppError::database_connection(format!("Failed to open SQLite database: {}", e))
    })?;

    debug!("SQLite pool ready for {}", database_url);
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// MySQL/PostgreSQL through a pooled `ConnectOptions`
pub async fn connect_generic(
    database_url: &str,
    backend_name: &str,
    pool_size: u32,
) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(pool_size.max(1))
        .min_connections(1)
        .connect_timeout(CONNECT_TIMEOUT)
        .acquire_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    Database::connect(options).await.map_err(|e| {
        AppError::database_connection(format!(
            "Failed to connect to {}: {}",
            backend_name, e
        ))
    })
}

/// Bring `log_use_app` up to the latest schema
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| AppError::database_operation(format!("Migration failed: {}", e)))?;

    info!("Audit log schema is up to date");
    Ok(())
}
