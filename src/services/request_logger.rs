//! Request audit log
//!
//! One persisted row per ranking request. Storage failures are returned to
//! the caller untouched.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::errors::Result;
use crate::services::CountryRecord;
use crate::storage::{LogEntry, NewLogEntry, SeaOrmStorage};

/// `{name, density}` pair stored in `countries_details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub density: f64,
}

impl From<&CountryRecord> for CountrySummary {
    fn from(record: &CountryRecord) -> Self {
        Self {
            name: record.name_common.clone(),
            density: record.population_density,
        }
    }
}

pub struct RequestLogger {
    storage: Arc<SeaOrmStorage>,
}

impl RequestLogger {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Persist one audit record, stamped with the current time
    pub async fn log(
        &self,
        username: &str,
        count: usize,
        details: &[CountrySummary],
    ) -> Result<LogEntry> {
        let countries_details = serde_json::to_string(details)?;

        let entry = NewLogEntry {
            username: username.to_string(),
            request_timestamp: Utc::now(),
            num_countries_returned: i32::try_from(count).unwrap_or(i32::MAX),
            countries_details,
        };

        trace!(
            "Writing log entry for {} with {} countries",
            entry.username, entry.num_countries_returned
        );

        self.storage.insert_log_entry(entry).await.inspect_err(|e| {
            error!("Failed to write request log for {}: {}", username, e);
        })
    }

    /// All entries in insertion order
    pub async fn entries(&self) -> Result<Vec<LogEntry>> {
        self.storage.list_log_entries().await
    }
}
