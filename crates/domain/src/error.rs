//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HotelError`]
//! via `From`. The HTTP boundary collapses every variant into a single
//! internal-error response.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier as received, rendered for diagnostics.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Apartment",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Apartment with id 42 not found");
    }

    #[test]
    fn should_convert_not_found_into_hotel_error() {
        let err: HotelError = NotFoundError {
            entity: "Apartment",
            id: "1".to_string(),
        }
        .into();
        assert!(matches!(err, HotelError::NotFound(_)));
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::other("disk on fire");
        let err = HotelError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }
}
