//! Shared application state for axum handlers.

use std::sync::Arc;

use podium_app::ports::PresenterRepository;
use podium_app::services::presenter_service::PresenterService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<PR> {
    /// Presenter CRUD service.
    pub presenter_service: Arc<PresenterService<PR>>,
}

impl<PR> Clone for AppState<PR> {
    fn clone(&self) -> Self {
        Self {
            presenter_service: Arc::clone(&self.presenter_service),
        }
    }
}

impl<PR> AppState<PR>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(presenter_service: PresenterService<PR>) -> Self {
        Self {
            presenter_service: Arc::new(presenter_service),
        }
    }
}
