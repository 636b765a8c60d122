//! # hotel-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `hotel-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `hotel-app` (for port traits) and `hotel-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod apartment_repo;
mod error;
mod pool;

pub use apartment_repo::SqliteApartmentRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
