//! Presenter — the single record type: someone giving a talk on a topic.

use serde::{Deserialize, Serialize};

use crate::error::{PodiumError, ValidationError};
use crate::id::PresenterId;

/// A stored presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presenter {
    pub id: PresenterId,
    pub name: String,
    pub topic: String,
    pub bio: Option<String>,
}

impl Presenter {
    /// Attach a store-assigned id to a validated draft.
    #[must_use]
    pub fn from_draft(id: PresenterId, draft: PresenterDraft) -> Self {
        Self {
            id,
            name: draft.name,
            topic: draft.topic,
            bio: draft.bio,
        }
    }
}

/// The mutable fields of a presenter, used by create and update.
///
/// Updates rewrite every field together; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterDraft {
    pub name: String,
    pub topic: String,
    pub bio: Option<String>,
}

impl PresenterDraft {
    /// Create a builder for constructing a [`PresenterDraft`].
    #[must_use]
    pub fn builder() -> PresenterDraftBuilder {
        PresenterDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::Validation`] when `name` or `topic` is empty.
    pub fn validate(&self) -> Result<(), PodiumError> {
        if self.name.is_empty() || self.topic.is_empty() {
            return Err(ValidationError::MissingRequiredFields.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`PresenterDraft`].
#[derive(Debug, Default)]
pub struct PresenterDraftBuilder {
    name: Option<String>,
    topic: Option<String>,
    bio: Option<String>,
}

impl PresenterDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn maybe_bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    /// Consume the builder, validate, and return a [`PresenterDraft`].
    ///
    /// An empty `bio` is normalised to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::Validation`] if `name` or `topic` is missing or empty.
    pub fn build(self) -> Result<PresenterDraft, PodiumError> {
        let draft = PresenterDraft {
            name: self.name.unwrap_or_default(),
            topic: self.topic.unwrap_or_default(),
            bio: self.bio.filter(|bio| !bio.is_empty()),
        };
        draft.validate()?;
        Ok(draft)
    }
}
