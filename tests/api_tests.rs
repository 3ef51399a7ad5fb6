//! HTTP API integration tests
//!
//! Query, log, echo and health endpoints over actix test services backed by
//! a stub fetcher and a temporary SQLite database.

use std::sync::{Arc, Once};

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::middleware::from_fn;
use actix_web::{App, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;

use country_density::api::middleware::{REQUEST_ID_HEADER, request_context};
use country_density::api::services::{ApiResponse, AppStartTime};
use country_density::config::{StaticConfig, init_config};
use country_density::runtime::lifetime::startup::RouteConfig;
use country_density::runtime::modes::server::configure_routes;
use country_density::services::{
    ANONYMOUS_USER, CountryFetcher, CountryRecord, DensityRanker, NO_TEXT_PROVIDED, QueryHandler,
    RequestLogger,
};
use country_density::storage::LogEntry;
use country_density::storage::backend::SeaOrmStorage;

static INIT: Once = Once::new();

fn init_static_config() {
    INIT.call_once(|| {
        init_config();
    });
}

struct StubFetcher {
    payload: Vec<Value>,
    ok: bool,
}

#[async_trait]
impl CountryFetcher for StubFetcher {
    async fn fetch_all(&self) -> (Vec<Value>, bool) {
        (self.payload.clone(), self.ok)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

struct TestEnv {
    storage: Arc<SeaOrmStorage>,
    handler: Arc<QueryHandler>,
    _dir: TempDir,
}

async fn setup(payload: Vec<Value>, ok: bool) -> TestEnv {
    init_static_config();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("api_test.db").display()
    );
    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite")
            .await
            .expect("Failed to create storage"),
    );

    let handler = Arc::new(QueryHandler::new(
        Arc::new(StubFetcher { payload, ok }),
        DensityRanker::new(),
        Arc::new(RequestLogger::new(storage.clone())),
    ));

    TestEnv {
        storage,
        handler,
        _dir: temp_dir,
    }
}

fn sample_countries() -> Vec<Value> {
    vec![
        json!({"name": {"common": "X", "official": "Republic of X"}, "area": 10, "population": 100}),
        json!({"name": {"common": "Y", "official": "Kingdom of Y"}, "area": 0, "population": 50}),
        json!({"name": {"common": "Z", "official": "Z"}, "area": 2, "population": 100}),
    ]
}

/// Create a test app with the default route layout (`/api/v1`, `/health`)
macro_rules! test_app {
    ($env:expr) => {{
        test::init_service(
            App::new()
                .wrap(from_fn(request_context))
                .app_data(web::Data::new($env.storage.clone()))
                .app_data(web::Data::new($env.handler.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(|cfg| {
                    configure_routes(cfg, &RouteConfig::from_config(&StaticConfig::default()))
                }),
        )
        .await
    }};
}

// =============================================================================
// Top-by-density
// =============================================================================

#[actix_web::test]
async fn test_top_density_success() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=5")
        .insert_header(("X-Authenticated-User", "alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse<Vec<CountryRecord>> = test::read_body_json(resp).await;
    assert_eq!(body.code, 0);
    let countries = body.data.unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name_common, "Z");
    assert_eq!(countries[0].population_density, 50.0);
    assert_eq!(countries[1].name_common, "X");

    let entries = env.handler.list_all_log_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[0].num_countries_returned, 2);
}

#[actix_web::test]
async fn test_top_density_camel_case_fields() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let first = &body["data"][0];
    assert_eq!(first["nameCommon"], "Z");
    assert_eq!(first["nameOfficial"], "Z");
    assert_eq!(first["populationDensity"], 50.0);
}

#[actix_web::test]
async fn test_top_density_anonymous() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let entries = env.handler.list_all_log_entries().await.unwrap();
    assert_eq!(entries[0].username, ANONYMOUS_USER);
}

#[actix_web::test]
async fn test_top_density_upstream_failure() {
    let env = setup(Vec::new(), false).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=5")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse<Vec<CountryRecord>> = test::read_body_json(resp).await;
    assert!(body.data.unwrap().is_empty());

    let entries = env.handler.list_all_log_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].countries_details, "[]");
}

#[actix_web::test]
async fn test_top_density_negative_count() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=-2")
        .to_request();
    let body: ApiResponse<Vec<CountryRecord>> = test::call_and_read_body_json(&app, req).await;

    assert!(body.data.unwrap().is_empty());
}

#[actix_web::test]
async fn test_top_density_missing_count() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert_eq!(body.code, 1000);
    assert!(body.data.is_none());

    // 参数错误不写日志
    assert!(env.handler.list_all_log_entries().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_top_density_non_integer_count() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=ten")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Logs
// =============================================================================

#[actix_web::test]
async fn test_logs_in_creation_order() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    for user in ["first", "second", "third"] {
        let req = TestRequest::get()
            .uri("/api/v1/countries/top-density?count=1")
            .insert_header(("X-Authenticated-User", user))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = TestRequest::get().uri("/api/v1/logs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ApiResponse<Vec<LogEntry>> = test::read_body_json(resp).await;
    let users: Vec<String> = body
        .data
        .unwrap()
        .into_iter()
        .map(|e| e.username)
        .collect();
    assert_eq!(users, vec!["first", "second", "third"]);
}

#[actix_web::test]
async fn test_logs_camel_case_fields() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=1")
        .to_request();
    test::call_service(&app, req).await;

    let req = TestRequest::get().uri("/api/v1/logs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let entry = &body["data"][0];
    assert!(entry["id"].is_number());
    assert!(entry["requestTimestamp"].is_string());
    assert_eq!(entry["numCountriesReturned"], 1);
    let details: Value =
        serde_json::from_str(entry["countriesDetails"].as_str().unwrap()).unwrap();
    assert_eq!(details, json!([{"name": "Z", "density": 50.0}]));
}

#[actix_web::test]
async fn test_logs_empty() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get().uri("/api/v1/logs").to_request();
    let body: ApiResponse<Vec<LogEntry>> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.code, 0);
    assert!(body.data.unwrap().is_empty());
}

// =============================================================================
// Echo
// =============================================================================

#[actix_web::test]
async fn test_echo_query() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/echo?text=hello")
        .to_request();
    let body: ApiResponse<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap(), "hello");
}

#[actix_web::test]
async fn test_echo_without_text() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get().uri("/api/v1/echo").to_request();
    let body: ApiResponse<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap(), NO_TEXT_PROVIDED);
}

#[actix_web::test]
async fn test_echo_post_body() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::post()
        .uri("/api/v1/echo")
        .set_json(json!({"text": "from body"}))
        .to_request();
    let body: ApiResponse<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap(), "from body");

    let req = TestRequest::post().uri("/api/v1/echo").to_request();
    let body: ApiResponse<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap(), NO_TEXT_PROVIDED);
}

#[actix_web::test]
async fn test_echo_does_not_log() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get().uri("/api/v1/echo?text=x").to_request();
    test::call_service(&app, req).await;

    assert!(env.handler.list_all_log_entries().await.unwrap().is_empty());
}

// =============================================================================
// Health & middleware
// =============================================================================

#[actix_web::test]
async fn test_health_check() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["storage"]["storage_type"], "sqlite");
    assert_eq!(body["data"]["storage"]["log_entries"], 0);
}

#[actix_web::test]
async fn test_readiness_and_liveness() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_request_id_generated_and_echoed() {
    let env = setup(Vec::new(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get(REQUEST_ID_HEADER).unwrap();
    assert_eq!(generated.to_str().unwrap().len(), 36);

    let req = TestRequest::get()
        .uri("/health/live")
        .insert_header((REQUEST_ID_HEADER, "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
}

#[actix_web::test]
async fn test_rejected_query_keeps_request_id() {
    let env = setup(sample_countries(), true).await;
    let app = test_app!(env);

    let req = TestRequest::get()
        .uri("/api/v1/countries/top-density?count=many")
        .insert_header((REQUEST_ID_HEADER, "bad-count-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "bad-count-1");
}
