//! # podium-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** under `/api/presenters[/{id}]`
//! - Answer cross-origin preflight (`OPTIONS`) requests before anything else
//! - Guard the API with a shared `X-API-Key` secret when configured
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `podium-app` (for port traits and services) and `podium-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod access;
pub mod api;
pub mod error;
pub mod router;
pub mod state;
