//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use hotel_app::ports::ApartmentRepository;

use crate::api::MessageBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the greeting at `/`, the apartment API, and the docs under
/// `/api-docs`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<AR>(state: AppState<AR>) -> Router
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(hello))
        .merge(crate::api::routes::<AR>())
        .merge(crate::docs::routes::<AppState<AR>>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello() -> Json<MessageBody> {
    Json(MessageBody {
        message: "hello world!".to_string(),
    })
}
