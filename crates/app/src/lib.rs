//! # hotel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement:
//!   - `ApartmentRepository`: insert, list, find, update, delete apartments
//! - Define the **driving port** as a use-case struct:
//!   - `ApartmentService`: create, list, get, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hotel-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
