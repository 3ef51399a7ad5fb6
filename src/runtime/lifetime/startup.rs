//! Startup wiring
//!
//! Storage and the query service graph are built once here. Server and CLI
//! both go through [`build_query_handler`].

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{StaticConfig, get_config};
use crate::services::{
    CountryFetcher, DensityRanker, QueryHandler, RequestLogger, RestCountriesFetcher,
};
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub query_handler: Arc<QueryHandler>,
    pub route_config: RouteConfig,
}

/// Where the HTTP scopes are mounted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    pub api_prefix: String,
    pub health_prefix: String,
}

impl RouteConfig {
    pub fn from_config(config: &StaticConfig) -> Self {
        Self {
            api_prefix: config.api.prefix.clone(),
            health_prefix: config.api.health_prefix.clone(),
        }
    }
}

/// rustls needs a process-wide crypto backend before the first TLS
/// handshake (upstream HTTPS, TLS database URLs)
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider was already installed");
    }
}

/// fetcher → ranker → logger → handler
pub fn build_query_handler(storage: Arc<SeaOrmStorage>, config: &StaticConfig) -> Arc<QueryHandler> {
    let fetcher = RestCountriesFetcher::from_config(&config.upstream);
    info!(
        "Country data source: {} ({})",
        fetcher.name(),
        fetcher.url()
    );

    let logger = RequestLogger::new(storage);
    Arc::new(QueryHandler::new(
        Arc::new(fetcher),
        DensityRanker::new(),
        Arc::new(logger),
    ))
}

pub async fn prepare_server_startup() -> Result<StartupContext> {
    let began = Instant::now();
    install_crypto_provider();

    let config = get_config();
    let storage = StorageFactory::create().await.with_context(|| {
        format!(
            "Cannot open audit log database {}",
            config.database.database_url
        )
    })?;

    let query_handler = build_query_handler(storage.clone(), &config);
    let route_config = RouteConfig::from_config(&config);

    info!(
        "Query API at {}, health probes at {}",
        route_config.api_prefix, route_config.health_prefix
    );
    debug!("Startup wiring took {:?}", began.elapsed());

    Ok(StartupContext {
        storage,
        query_handler,
        route_config,
    })
}
