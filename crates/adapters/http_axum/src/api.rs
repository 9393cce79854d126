//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod presenters;

use axum::Router;
use axum::routing::{MethodRouter, get};

use podium_app::ports::PresenterRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// The collection answers on `/presenters` and `/presenters/`. A trailing
/// segment that is not a positive integer is treated as absent by the
/// item handlers, so both routes accept the full method set.
///
/// `HEAD` is registered explicitly, otherwise axum would answer it with the
/// `GET` handler.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/presenters", collection())
        .route("/presenters/", collection())
        .route(
            "/presenters/{segment}",
            get(presenters::get::<PR>)
                .post(presenters::create::<PR>)
                .put(presenters::update::<PR>)
                .delete(presenters::delete::<PR>)
                .head(presenters::method_not_allowed)
                .fallback(presenters::method_not_allowed),
        )
}

fn collection<PR>() -> MethodRouter<AppState<PR>>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    get(presenters::list::<PR>)
        .post(presenters::create::<PR>)
        .put(presenters::update_without_id)
        .delete(presenters::delete_without_id)
        .head(presenters::method_not_allowed)
        .fallback(presenters::method_not_allowed)
}
