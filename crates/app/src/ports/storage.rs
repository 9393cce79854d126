//! Storage port — repository trait for persistence.

use std::future::Future;

use podium_domain::error::PodiumError;
use podium_domain::id::PresenterId;
use podium_domain::presenter::{Presenter, PresenterDraft};

/// Persistence for presenters.
///
/// Every method maps to exactly one statement; implementations must not
/// wrap calls in multi-statement transactions.
pub trait PresenterRepository {
    /// Insert a new row and return the id assigned by the store.
    ///
    /// Implementations return [`PodiumError::NotPersisted`] when the store
    /// executes the statement without reporting a stored row.
    fn create(
        &self,
        draft: PresenterDraft,
    ) -> impl Future<Output = Result<PresenterId, PodiumError>> + Send;

    /// Fetch a single presenter.
    fn get_by_id(
        &self,
        id: PresenterId,
    ) -> impl Future<Output = Result<Option<Presenter>, PodiumError>> + Send;

    /// Fetch every presenter, ordered by `name` ascending.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Presenter>, PodiumError>> + Send;

    /// Rewrite all mutable fields of the presenter with `id`.
    ///
    /// Returns the number of rows changed.
    fn update(
        &self,
        id: PresenterId,
        draft: PresenterDraft,
    ) -> impl Future<Output = Result<u64, PodiumError>> + Send;

    /// Remove the presenter with `id`.
    ///
    /// Returns the number of rows removed.
    fn delete(&self, id: PresenterId) -> impl Future<Output = Result<u64, PodiumError>> + Send;
}
