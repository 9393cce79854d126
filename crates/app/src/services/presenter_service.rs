//! Presenter service — use-cases for managing presenters.

use podium_domain::error::{NotFoundError, PodiumError};
use podium_domain::id::PresenterId;
use podium_domain::presenter::{Presenter, PresenterDraft};

use crate::ports::PresenterRepository;

/// Application service for presenter CRUD operations.
pub struct PresenterService<R> {
    repo: R,
}

impl<R: PresenterRepository> PresenterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new presenter and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::Validation`] if invariants fail,
    /// [`PodiumError::NotPersisted`] if the store reports no row, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(presenter_name = %draft.name))]
    pub async fn create_presenter(&self, draft: PresenterDraft) -> Result<PresenterId, PodiumError> {
        draft.validate()?;
        let id = self.repo.create(draft).await?;
        tracing::debug!(%id, "presenter created");
        Ok(id)
    }

    /// Look up a presenter by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::NotFound`] when no presenter with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_presenter(&self, id: PresenterId) -> Result<Presenter, PodiumError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Presenter(id).into())
    }

    /// List all presenters ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_presenters(&self) -> Result<Vec<Presenter>, PodiumError> {
        self.repo.get_all().await
    }

    /// Rewrite every mutable field of an existing presenter.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::Validation`] if invariants fail,
    /// [`PodiumError::NotFound`] when no row changed, or a storage error
    /// from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_presenter(
        &self,
        id: PresenterId,
        draft: PresenterDraft,
    ) -> Result<(), PodiumError> {
        draft.validate()?;
        match self.repo.update(id, draft).await? {
            0 => Err(NotFoundError::Unchanged(id).into()),
            _ => Ok(()),
        }
    }

    /// Delete a presenter by id.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::NotFound`] when no row was removed, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_presenter(&self, id: PresenterId) -> Result<(), PodiumError> {
        match self.repo.delete(id).await? {
            0 => Err(NotFoundError::Presenter(id).into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_domain::error::ValidationError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPresenterRepo {
        store: Mutex<BTreeMap<PresenterId, Presenter>>,
        next_id: Mutex<i64>,
    }

    impl PresenterRepository for InMemoryPresenterRepo {
        fn create(
            &self,
            draft: PresenterDraft,
        ) -> impl Future<Output = Result<PresenterId, PodiumError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let id = PresenterId::try_from(*next_id).unwrap();
            let mut store = self.store.lock().unwrap();
            store.insert(id, Presenter::from_draft(id, draft));
            async move { Ok(id) }
        }

        fn get_by_id(
            &self,
            id: PresenterId,
        ) -> impl Future<Output = Result<Option<Presenter>, PodiumError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Presenter>, PodiumError>> + Send {
            let store = self.store.lock().unwrap();
            let mut result: Vec<Presenter> = store.values().cloned().collect();
            result.sort_by(|a, b| a.name.cmp(&b.name));
            async { Ok(result) }
        }

        fn update(
            &self,
            id: PresenterId,
            draft: PresenterDraft,
        ) -> impl Future<Output = Result<u64, PodiumError>> + Send {
            let mut store = self.store.lock().unwrap();
            let changed = match store.get_mut(&id) {
                Some(existing) => {
                    *existing = Presenter::from_draft(id, draft);
                    1
                }
                None => 0,
            };
            async move { Ok(changed) }
        }

        fn delete(&self, id: PresenterId) -> impl Future<Output = Result<u64, PodiumError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = u64::from(store.remove(&id).is_some());
            async move { Ok(removed) }
        }
    }

    struct RefusingRepo;

    impl PresenterRepository for RefusingRepo {
        async fn create(&self, _draft: PresenterDraft) -> Result<PresenterId, PodiumError> {
            Err(PodiumError::NotPersisted)
        }
        async fn get_by_id(&self, _id: PresenterId) -> Result<Option<Presenter>, PodiumError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Presenter>, PodiumError> {
            Ok(vec![])
        }
        async fn update(&self, _id: PresenterId, _draft: PresenterDraft) -> Result<u64, PodiumError> {
            Ok(0)
        }
        async fn delete(&self, _id: PresenterId) -> Result<u64, PodiumError> {
            Err(PodiumError::Storage("database is locked".into()))
        }
    }

    fn make_service() -> PresenterService<InMemoryPresenterRepo> {
        PresenterService::new(InMemoryPresenterRepo::default())
    }

    fn draft(name: &str, topic: &str) -> PresenterDraft {
        PresenterDraft::builder()
            .name(name)
            .topic(topic)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_presenter_when_valid() {
        let svc = make_service();

        let id = svc
            .create_presenter(draft("Ada", "Computing"))
            .await
            .unwrap();

        let fetched = svc.get_presenter(id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "Ada");
        assert_eq!(fetched.topic, "Computing");
        assert!(fetched.bio.is_none());
    }

    #[tokio::test]
    async fn should_reject_create_when_topic_is_empty() {
        let svc = make_service();
        let mut invalid = draft("Ada", "Computing");
        invalid.topic = String::new();

        let result = svc.create_presenter(invalid).await;
        assert!(matches!(
            result,
            Err(PodiumError::Validation(
                ValidationError::MissingRequiredFields
            ))
        ));
    }

    #[tokio::test]
    async fn should_propagate_not_persisted_from_repository() {
        let svc = PresenterService::new(RefusingRepo);
        let result = svc.create_presenter(draft("Ada", "Computing")).await;
        assert!(matches!(result, Err(PodiumError::NotPersisted)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_presenter_missing() {
        let svc = make_service();
        let id = PresenterId::try_from(99).unwrap();
        let result = svc.get_presenter(id).await;
        assert!(matches!(
            result,
            Err(PodiumError::NotFound(NotFoundError::Presenter(missing))) if missing == id
        ));
    }

    #[tokio::test]
    async fn should_list_presenters_sorted_by_name() {
        let svc = make_service();
        svc.create_presenter(draft("Grace", "Compilers"))
            .await
            .unwrap();
        svc.create_presenter(draft("Ada", "Computing")).await.unwrap();
        svc.create_presenter(draft("Linus", "Kernels")).await.unwrap();

        let names: Vec<String> = svc
            .list_presenters()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Ada", "Grace", "Linus"]);
    }

    #[tokio::test]
    async fn should_update_every_field() {
        let svc = make_service();
        let id = svc
            .create_presenter(
                PresenterDraft::builder()
                    .name("Ada")
                    .topic("Computing")
                    .bio("Countess")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        svc.update_presenter(id, draft("Ada", "Algorithms"))
            .await
            .unwrap();

        let fetched = svc.get_presenter(id).await.unwrap();
        assert_eq!(fetched.topic, "Algorithms");
        assert!(fetched.bio.is_none());
    }

    #[tokio::test]
    async fn should_report_unchanged_when_updating_missing_presenter() {
        let svc = make_service();
        let id = PresenterId::try_from(5).unwrap();
        let result = svc.update_presenter(id, draft("Ada", "Computing")).await;
        assert!(matches!(
            result,
            Err(PodiumError::NotFound(NotFoundError::Unchanged(_)))
        ));
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let svc = make_service();
        let id = svc
            .create_presenter(draft("Ada", "Computing"))
            .await
            .unwrap();
        let mut invalid = draft("Ada", "Computing");
        invalid.name = String::new();

        let result = svc.update_presenter(id, invalid).await;
        assert!(matches!(result, Err(PodiumError::Validation(_))));
    }

    #[tokio::test]
    async fn should_delete_presenter() {
        let svc = make_service();
        let id = svc
            .create_presenter(draft("Ada", "Computing"))
            .await
            .unwrap();

        svc.delete_presenter(id).await.unwrap();

        let result = svc.get_presenter(id).await;
        assert!(matches!(result, Err(PodiumError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_presenter() {
        let svc = make_service();
        let result = svc
            .delete_presenter(PresenterId::try_from(1).unwrap())
            .await;
        assert!(matches!(
            result,
            Err(PodiumError::NotFound(NotFoundError::Presenter(_)))
        ));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_on_delete() {
        let svc = PresenterService::new(RefusingRepo);
        let result = svc
            .delete_presenter(PresenterId::try_from(1).unwrap())
            .await;
        assert!(matches!(result, Err(PodiumError::Storage(_))));
    }
}
