//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PodiumError`]
//! via `From`. Adapters decide how a variant is presented to callers.

use crate::id::PresenterId;

/// Base error type shared by the domain, application, and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum PodiumError {
    /// An invariant of the input was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The store accepted the statement but did not report a stored row.
    #[error("Failed to add presenter.")]
    NotPersisted,

    /// The storage backend failed.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` or `topic` is missing or empty.
    #[error("Both \"name\" and \"topic\" are required fields.")]
    MissingRequiredFields,
}

/// Lookup and mutation misses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No presenter with the given id exists.
    #[error("Presenter with ID {0} not found.")]
    Presenter(PresenterId),

    /// An update touched zero rows.
    #[error("Presenter with ID {0} not found or no changes made.")]
    Unchanged(PresenterId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_missing_fields() {
        let err = PodiumError::from(ValidationError::MissingRequiredFields);
        assert_eq!(
            err.to_string(),
            "Both \"name\" and \"topic\" are required fields."
        );
    }

    #[test]
    fn should_include_id_in_not_found_messages() {
        let id = PresenterId::try_from(7).unwrap();
        assert_eq!(
            NotFoundError::Presenter(id).to_string(),
            "Presenter with ID 7 not found."
        );
        assert_eq!(
            NotFoundError::Unchanged(id).to_string(),
            "Presenter with ID 7 not found or no changes made."
        );
    }

    #[test]
    fn should_forward_storage_message() {
        let err = PodiumError::Storage("disk I/O error".into());
        assert_eq!(err.to_string(), "disk I/O error");
    }
}
