//! Requester identity extractor
//!
//! Authentication happens in front of this service; the resolved username
//! arrives in a request header (`api.identity_header`). Missing or blank
//! headers leave the requester unset.

use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::config::{ApiConfig, try_get_config};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester(pub Option<String>);

impl Requester {
    pub fn from_headers(headers: &HeaderMap, header_name: &str) -> Self {
        let name = headers
            .get(header_name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        Self(name)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

fn identity_header() -> String {
    try_get_config()
        .map(|c| c.api.identity_header.clone())
        .unwrap_or_else(|| ApiConfig::default().identity_header)
}

impl FromRequest for Requester {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Requester::from_headers(
            req.headers(),
            &identity_header(),
        )))
    }
}
