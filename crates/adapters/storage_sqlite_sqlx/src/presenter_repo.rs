//! `SQLite` implementation of [`PresenterRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use podium_app::ports::PresenterRepository;
use podium_domain::error::PodiumError;
use podium_domain::id::PresenterId;
use podium_domain::presenter::{Presenter, PresenterDraft};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Presenter`].
struct Wrapper(Presenter);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Presenter> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let topic: String = row.try_get("topic")?;
        let bio: Option<String> = row.try_get("bio")?;

        let id = PresenterId::try_from(id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Presenter {
            id,
            name,
            topic,
            bio,
        }))
    }
}

const INSERT: &str = "INSERT INTO presenters (name, topic, bio) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, topic, bio FROM presenters WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, topic, bio FROM presenters ORDER BY name ASC";
const UPDATE: &str = "UPDATE presenters SET name = ?, topic = ?, bio = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM presenters WHERE id = ?";

/// `SQLite`-backed presenter repository.
pub struct SqlitePresenterRepository {
    pool: SqlitePool,
}

impl SqlitePresenterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PresenterRepository for SqlitePresenterRepository {
    fn create(
        &self,
        draft: PresenterDraft,
    ) -> impl Future<Output = Result<PresenterId, PodiumError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(draft.name)
                .bind(draft.topic)
                .bind(draft.bio)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() != 1 {
                return Err(PodiumError::NotPersisted);
            }
            PresenterId::try_from(result.last_insert_rowid()).map_err(|_| PodiumError::NotPersisted)
        }
    }

    fn get_by_id(
        &self,
        id: PresenterId,
    ) -> impl Future<Output = Result<Option<Presenter>, PodiumError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Presenter>, PodiumError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: PresenterId,
        draft: PresenterDraft,
    ) -> impl Future<Output = Result<u64, PodiumError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(draft.name)
                .bind(draft.topic)
                .bind(draft.bio)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: PresenterId) -> impl Future<Output = Result<u64, PodiumError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}
