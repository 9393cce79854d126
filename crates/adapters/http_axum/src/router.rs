//! Axum router assembly.

use axum::Router;
use axum::middleware;
use tower_http::trace::TraceLayer;

use podium_app::ports::PresenterRepository;

use crate::access::{self, AccessPolicy};
use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Layers, from the outside in:
/// 1. [`TraceLayer`] logging each request/response at `DEBUG`
/// 2. preflight answering and CORS headers, when `access.cors` is set
/// 3. the API-key guard, when `access.api_key` is set
/// 4. `/api` routes, with a JSON 404 fallback for every other path
pub fn build<PR>(state: AppState<PR>, access: &AccessPolicy) -> Router
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    let mut app = Router::new()
        .nest("/api", crate::api::routes())
        .fallback(route_not_found);

    if let Some(key) = access.api_key.clone() {
        app = app.layer(middleware::from_fn_with_state(key, access::require_api_key));
    }

    if access.cors {
        app = app
            .layer(access::cors_layer())
            .layer(middleware::from_fn(access::answer_preflight));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
