//! Health probes
//!
//! `/health` counts audit rows through storage directly, so probing never
//! calls the upstream API or writes a log entry.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

use crate::storage::SeaOrmStorage;

use super::error_code::ErrorCode;
use super::helpers::json_response;
use super::types::{HealthResponse, HealthStorageCheck};

const STORAGE_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

async fn probe_storage(storage: &SeaOrmStorage) -> HealthStorageCheck {
    let storage_type = storage.get_backend_config().storage_type;

    let (log_entries, error) =
        match tokio::time::timeout(STORAGE_PROBE_TIMEOUT, storage.count()).await {
            Ok(Ok(count)) => (Some(count), None),
            Ok(Err(e)) => {
                error!("Storage probe failed: {}", e);
                (None, Some(format!("database error: {}", e)))
            }
            Err(_) => {
                error!("Storage probe timed out after {:?}", STORAGE_PROBE_TIMEOUT);
                (None, Some("timeout".to_string()))
            }
        };

    HealthStorageCheck {
        status: if error.is_none() { "healthy" } else { "unhealthy" }.to_string(),
        storage_type,
        log_entries,
        error,
    }
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<SeaOrmStorage>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let started = Instant::now();
        let storage_check = probe_storage(&storage).await;
        let healthy = storage_check.error.is_none();

        let now = chrono::Utc::now();
        let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        let report = HealthResponse {
            status: storage_check.status.clone(),
            timestamp: now.to_rfc3339(),
            uptime,
            storage: storage_check,
            response_time_ms: started.elapsed().as_millis() as u32,
        };

        debug!(
            "Health check: {} (uptime {}s, {:?})",
            report.status,
            uptime,
            started.elapsed()
        );

        if healthy {
            json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(report))
        } else {
            json_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::ServiceUnavailable,
                "Service Unavailable",
                Some(report),
            )
        }
    }

    pub async fn readiness_check() -> impl Responder {
        trace!("Readiness probe");
        HttpResponse::Ok().content_type("text/plain").body("OK")
    }

    pub async fn liveness_check() -> impl Responder {
        trace!("Liveness probe");
        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
