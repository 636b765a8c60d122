//! # hotel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for apartments (`/apartments`, `/apartments/{id}`)
//! - Serve the OpenAPI document and an interactive viewer under `/api-docs`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Collapse every failure into one generic `500` envelope
//!
//! ## Dependency rule
//! Depends on `hotel-app` (for port traits and services) and `hotel-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod docs;
pub mod error;
pub mod router;
pub mod state;
