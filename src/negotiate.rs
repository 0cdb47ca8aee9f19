//! JSON vs HTML selection for the dashboard route.
//!
//! The decision only needs a query parameter and two headers, so it is written
//! against the small [`RequestHints`] trait rather than axum request types.

use http::header::ACCEPT;
use http::HeaderMap;

/// Query parameter that forces a representation
pub const FORMAT_PARAM: &str = "format";

/// Header set by browser XHR libraries
pub const X_REQUESTED_WITH: &str = "x-requested-with";

/// Response representation for `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Html,
}

/// The parts of a request that negotiation reads.
pub trait RequestHints {
    fn query_param(&self, name: &str) -> Option<&str>;
    fn header(&self, name: &str) -> Option<&str>;
}

/// Pick JSON or HTML.
///
/// JSON wins if any of these hold, checked in order:
/// 1. `?format=json`
/// 2. `Accept` contains `application/json`
/// 3. `X-Requested-With: XMLHttpRequest`
///
/// A bare `Accept: */*` is not treated as asking for JSON.
pub fn negotiate(hints: &impl RequestHints) -> Representation {
    if hints.query_param(FORMAT_PARAM) == Some("json") {
        return Representation::Json;
    }
    if hints
        .header(ACCEPT.as_str())
        .is_some_and(|accept| accept.contains("application/json"))
    {
        return Representation::Json;
    }
    if hints.header(X_REQUESTED_WITH) == Some("XMLHttpRequest") {
        return Representation::Json;
    }
    Representation::Html
}

/// Borrowed view over an axum request's query pairs and headers.
///
/// Query pairs keep their request order; a repeated parameter resolves to its
/// first occurrence.
pub struct Hints<'a> {
    pub query: &'a [(String, String)],
    pub headers: &'a HeaderMap,
}

impl RequestHints for Hints<'_> {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    // Non-UTF-8 header values are treated as absent
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
