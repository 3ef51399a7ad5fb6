//! 连通性占位端点

use actix_web::{Responder, web};
use std::sync::Arc;

use crate::services::QueryHandler;

use super::helpers::success_response;
use super::types::EchoParams;

/// GET /echo?text=...
pub async fn echo_query(
    params: web::Query<EchoParams>,
    handler: web::Data<Arc<QueryHandler>>,
) -> impl Responder {
    success_response(handler.echo(params.text.as_deref()))
}

/// POST /echo，body 可省略
pub async fn echo_body(
    params: Option<web::Json<EchoParams>>,
    handler: web::Data<Arc<QueryHandler>>,
) -> impl Responder {
    let text = params.and_then(|p| p.into_inner().text);
    success_response(handler.echo(text.as_deref()))
}

pub fn echo_routes() -> actix_web::Scope {
    web::scope("/echo")
        .route("", web::get().to(echo_query))
        .route("", web::post().to(echo_body))
}
