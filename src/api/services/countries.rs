//! 排名查询端点

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{trace, warn};

use crate::api::extractors::Requester;
use crate::api::middleware::RequestId;
use crate::services::QueryHandler;

use super::error_code::ErrorCode;
use super::helpers::{error_from_app, error_response, success_response};
use super::types::TopDensityQuery;

/// GET /countries/top-density?count=N
pub async fn top_by_density(
    query: web::Query<TopDensityQuery>,
    requester: Requester,
    handler: web::Data<Arc<QueryHandler>>,
) -> impl Responder {
    trace!(
        "Top-by-density request: count={}, requester={:?}",
        query.count, requester.0
    );

    match handler
        .top_by_density(query.count, requester.as_deref())
        .await
    {
        Ok(countries) => success_response(countries),
        Err(e) => error_from_app(&e, Some(ErrorCode::LogWriteFailed)),
    }
}

/// `count` 缺失或非整数时返回统一的 JSON 错误体
fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid query: {}", err);
    warn!(
        "Rejected {} (request {}): {}",
        req.uri(),
        RequestId::of(req).as_deref().unwrap_or("-"),
        err
    );
    let response = error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, &message);
    InternalError::from_response(err, response).into()
}

/// 国家路由 `/countries`
pub fn countries_routes() -> actix_web::Scope {
    web::scope("/countries")
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/top-density", web::get().to(top_by_density))
}
