//! HTTP API
//!
//! - `services`: route handlers and response types
//! - `middleware`: request id and timing
//! - `extractors`: requester identity

pub mod extractors;
pub mod middleware;
pub mod services;
