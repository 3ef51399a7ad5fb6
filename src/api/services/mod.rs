pub mod countries;
pub mod echo;
pub mod error_code;
pub mod health;
pub mod helpers;
pub mod logs;
pub mod types;

pub use countries::{countries_routes, top_by_density};
pub use echo::{echo_body, echo_query, echo_routes};
pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use helpers::{error_from_app, error_response, success_response};
pub use logs::{list_log_entries, logs_routes};
pub use types::*;

/// 查询 API 路由（挂载在 `api.prefix` 下）
pub fn api_routes() -> actix_web::Scope {
    actix_web::web::scope("")
        .service(countries_routes())
        .service(logs_routes())
        .service(echo_routes())
}
