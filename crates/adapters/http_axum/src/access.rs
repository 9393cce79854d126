//! Request admission: CORS preflight answering and the shared-secret guard.
//!
//! Both features are optional. When enabled, preflight runs first so
//! browsers can negotiate without presenting the key.

use std::fmt;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;

/// Header carrying the caller's key.
pub const API_KEY_HEADER: &str = "x-api-key";

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// The shared secret every guarded request must present.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// Compare in constant time with respect to the key contents.
    #[must_use]
    pub fn matches(&self, provided: &[u8]) -> bool {
        self.0.as_bytes().ct_eq(provided).into()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Which admission features the router enables.
///
/// The default policy is fully open: no key, no preflight handling.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    pub api_key: Option<ApiKey>,
    pub cors: bool,
}

impl AccessPolicy {
    #[must_use]
    pub fn with_api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    #[must_use]
    pub fn with_cors(mut self) -> Self {
        self.cors = true;
        self
    }
}

/// Reject requests whose `X-API-Key` header does not match.
pub async fn require_api_key(
    State(key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let verdict = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| key.matches(value.as_bytes()));

    match verdict {
        Some(true) => Ok(next.run(request).await),
        Some(false) => {
            tracing::warn!(path = %request.uri().path(), "rejected request with invalid API key");
            Err(ApiError::Unauthorized)
        }
        None => {
            tracing::debug!(path = %request.uri().path(), "rejected request without API key");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Answer every `OPTIONS` request with a permissive plain-text `OK`.
pub async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_HEADERS, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        "OK",
    )
        .into_response()
}

/// CORS headers for non-preflight responses.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_identical_key() {
        let key = ApiKey::new("a5d1bdba");
        assert!(key.matches(b"a5d1bdba"));
    }

    #[test]
    fn should_reject_different_or_truncated_key() {
        let key = ApiKey::new("a5d1bdba");
        assert!(!key.matches(b"a5d1bdbb"));
        assert!(!key.matches(b"a5d1"));
        assert!(!key.matches(b""));
    }

    #[test]
    fn should_not_leak_key_in_debug_output() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }

    #[test]
    fn should_default_to_open_policy() {
        let policy = AccessPolicy::default();
        assert!(policy.api_key.is_none());
        assert!(!policy.cors);
    }
}
