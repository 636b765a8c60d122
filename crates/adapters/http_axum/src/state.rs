//! Shared application state for axum handlers.

use std::sync::Arc;

use hotel_app::ports::ApartmentRepository;
use hotel_app::services::apartment_service::ApartmentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<AR> {
    /// Apartment CRUD service.
    pub apartment_service: Arc<ApartmentService<AR>>,
}

impl<AR> Clone for AppState<AR> {
    fn clone(&self) -> Self {
        Self {
            apartment_service: Arc::clone(&self.apartment_service),
        }
    }
}

impl<AR> AppState<AR>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(apartment_service: ApartmentService<AR>) -> Self {
        Self {
            apartment_service: Arc::new(apartment_service),
        }
    }
}
