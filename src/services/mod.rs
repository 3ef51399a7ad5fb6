//! Service layer for business logic
//!
//! The ranking pipeline (fetch → rank → log → respond) shared between the
//! HTTP API and the CLI.

mod country_fetcher;
mod density_ranker;
mod query_handler;
mod request_logger;

pub use country_fetcher::{CountryFetcher, RestCountriesFetcher, decode_countries};
pub use density_ranker::{CountryRecord, DensityRanker, NOT_AVAILABLE};
pub use query_handler::{ANONYMOUS_USER, NO_TEXT_PROVIDED, QueryHandler};
pub use request_logger::{CountrySummary, RequestLogger};
