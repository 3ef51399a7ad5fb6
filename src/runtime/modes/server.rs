//! Server mode
//!
//! Serves the query API and the health probes until the server exits or
//! Ctrl+C arrives.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders, from_fn},
    web,
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::api::middleware::request_context;
use crate::api::services::{AppStartTime, api_routes, health_routes};
use crate::runtime::lifetime::{self, startup::RouteConfig};

/// Worker count is capped regardless of `server.cpu_count`
const MAX_WORKERS: usize = 32;

/// Mount health probes and the query API under their configured prefixes
pub fn configure_routes(cfg: &mut web::ServiceConfig, routes: &RouteConfig) {
    cfg.service(web::scope(&routes.health_prefix).service(health_routes()))
        .service(web::scope(&routes.api_prefix).service(api_routes()));
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .inspect_err(|e| error!("Server startup failed: {:#}", e))?;

    let config = crate::config::get_config();
    let workers = config.server.cpu_count.clamp(1, MAX_WORKERS);
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    // The closure below takes ownership of the storage handle
    let db_for_shutdown = startup.storage.get_db().clone();

    let storage = startup.storage;
    let query_handler = startup.query_handler;
    let routes = startup.route_config;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(request_context))
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(query_handler.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(|cfg| configure_routes(cfg, &routes))
    })
    .keep_alive(Duration::from_secs(30))
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    warn!(
        "Listening on http://{} with {} workers",
        bind_address, workers
    );

    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&db_for_shutdown) => {
            info!("Graceful shutdown completed");
        }
    }

    Ok(())
}
