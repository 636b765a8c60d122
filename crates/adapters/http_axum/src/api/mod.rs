//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod apartments;

use axum::Router;
use axum::routing::get;
use serde::Serialize;
use utoipa::ToSchema;

use hotel_app::ports::ApartmentRepository;

use crate::state::AppState;

/// `{"message": ...}` envelope used by the root route and every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Internal Server Error")]
    pub message: String,
}

impl MessageBody {
    /// Fixed body for every failed request.
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self {
            message: "Internal Server Error".to_string(),
        }
    }
}

/// Build the apartment routes.
pub fn routes<AR>() -> Router<AppState<AR>>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/apartments",
            get(apartments::list::<AR>).post(apartments::create::<AR>),
        )
        .route(
            "/apartments/{id}",
            get(apartments::get::<AR>)
                .patch(apartments::update::<AR>)
                .delete(apartments::delete::<AR>),
        )
}
