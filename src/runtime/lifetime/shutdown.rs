//! Graceful shutdown

use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, warn};

const DB_CLOSE_TIMEOUT: Duration = Duration::from_secs(10);

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl+C ({}), shutting down now", e);
        return;
    }
    info!("Shutdown signal received");
}

/// Close the connection pool, giving up after a fixed timeout
pub async fn close_database(db: DatabaseConnection) {
    match timeout(DB_CLOSE_TIMEOUT, db.close()).await {
        Ok(Ok(())) => info!("Database connection closed"),
        Ok(Err(e)) => error!("Failed to close database connection: {}", e),
        Err(_) => error!("Closing database timed out after {:?}", DB_CLOSE_TIMEOUT),
    }
}

/// Resolves after Ctrl+C once the database is closed
pub async fn listen_for_shutdown(db: &DatabaseConnection) {
    wait_for_ctrl_c().await;
    close_database(db.clone()).await;
}
