//! 审计日志端点

use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::QueryHandler;

use super::error_code::ErrorCode;
use super::helpers::{error_from_app, success_response};

/// GET /logs
pub async fn list_log_entries(handler: web::Data<Arc<QueryHandler>>) -> impl Responder {
    trace!("Listing all log entries");

    match handler.list_all_log_entries().await {
        Ok(entries) => success_response(entries),
        Err(e) => error_from_app(&e, Some(ErrorCode::LogQueryFailed)),
    }
}

/// 日志路由 `/logs`
pub fn logs_routes() -> actix_web::Scope {
    web::scope("/logs")
        .route("", web::get().to(list_log_entries))
        .route("", web::head().to(list_log_entries))
}
