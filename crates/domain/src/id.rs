//! Typed identifier newtype backed by a positive integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reasons a value cannot be used as a [`PresenterId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIdError {
    /// The text is not an integer.
    #[error("identifier is not an integer")]
    NotANumber(#[from] std::num::ParseIntError),

    /// Zero or negative.
    #[error("identifier must be positive, got {0}")]
    NotPositive(i64),
}

/// Unique identifier for a [`Presenter`](crate::presenter::Presenter).
///
/// Assigned by the store on insert; always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PresenterId(i64);

impl PresenterId {
    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Interpret a trailing path segment.
    ///
    /// Returns `None` for anything that is not a positive integer, so callers
    /// fall back to collection semantics.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        segment.parse().ok()
    }
}

impl TryFrom<i64> for PresenterId {
    type Error = InvalidIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(InvalidIdError::NotPositive(value))
        }
    }
}

impl From<PresenterId> for i64 {
    fn from(id: PresenterId) -> Self {
        id.0
    }
}

impl fmt::Display for PresenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PresenterId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<i64>()?)
    }
}
