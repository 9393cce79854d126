//! # podium-domain
//!
//! Pure domain model for the podium presenter registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Presenters** (the single record type: name, topic, optional bio)
//! - Define **Presenter drafts** (validated input for create and update)
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod presenter;
