//! Query orchestration
//!
//! `top_by_density` runs fetch → rank → log → return in order on the
//! calling task. Components are handed in at construction.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::services::{
    CountryFetcher, CountryRecord, CountrySummary, DensityRanker, RequestLogger,
};
use crate::storage::LogEntry;

/// Username recorded when no requester identity is available
pub const ANONYMOUS_USER: &str = "anonymous";

/// Reply of `echo` without input
pub const NO_TEXT_PROVIDED: &str = "No text provided.";

pub struct QueryHandler {
    fetcher: Arc<dyn CountryFetcher>,
    ranker: DensityRanker,
    logger: Arc<RequestLogger>,
}

impl QueryHandler {
    pub fn new(
        fetcher: Arc<dyn CountryFetcher>,
        ranker: DensityRanker,
        logger: Arc<RequestLogger>,
    ) -> Self {
        Self {
            fetcher,
            ranker,
            logger,
        }
    }

    /// Top `count` countries by population density.
    ///
    /// An upstream failure yields an empty list; the request is logged
    /// either way. Only a failed log write is an error.
    pub async fn top_by_density(
        &self,
        count: i64,
        requester: Option<&str>,
    ) -> Result<Vec<CountryRecord>> {
        let username = resolve_username(requester);

        let (raw, ok) = self.fetcher.fetch_all().await;
        if !ok {
            warn!(
                "{} returned no data, ranking an empty set",
                self.fetcher.name()
            );
        }

        let ranked = self.ranker.rank(&raw, count);
        debug!(
            "Ranked {} of {} countries (count={})",
            ranked.len(),
            raw.len(),
            count
        );

        let summary: Vec<CountrySummary> = ranked.iter().map(CountrySummary::from).collect();
        let entry = self.logger.log(username, ranked.len(), &summary).await?;

        info!(
            "Top-by-density query by {}: {} countries returned (log #{})",
            username,
            ranked.len(),
            entry.id
        );

        Ok(ranked)
    }

    /// Every audit record, oldest first
    pub async fn list_all_log_entries(&self) -> Result<Vec<LogEntry>> {
        self.logger.entries().await
    }

    pub fn echo(&self, text: Option<&str>) -> String {
        text.unwrap_or(NO_TEXT_PROVIDED).to_string()
    }
}

/// Blank identities count as anonymous
fn resolve_username(requester: Option<&str>) -> &str {
    match requester.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS_USER,
    }
}
