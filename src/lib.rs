//! country-density - population density rankings with an audit trail
//!
//! Fetches country data from a REST source, ranks countries by
//! population per km², and persists one log record per ranking query.
//!
//! # Architecture
//! - `services`: fetcher, ranker, request logger and query orchestration
//! - `storage`: audit log persistence (SeaORM)
//! - `api`: HTTP services and middleware
//! - `interfaces`: command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
