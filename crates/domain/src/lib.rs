//! # hotel-domain
//!
//! Pure domain model for the hotel API.
//!
//! ## Responsibilities
//! - Foundational types: the integer [`ApartmentId`](id::ApartmentId) and error conventions
//! - Define the **Apartment** record and the inputs that create or modify it
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod apartment;
