//! HTTP error response mapping.
//!
//! Every failure surfaces as `500 {"message": "Internal Server Error"}`.
//! The cause is logged; nothing about it reaches the client.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hotel_domain::error::HotelError;

use crate::api::MessageBody;

/// Failure raised while serving an API request.
#[derive(Debug)]
pub enum ApiError {
    /// The application layer or storage failed.
    Domain(HotelError),
    /// The request body could not be read as the expected JSON.
    Body(JsonRejection),
}

impl From<HotelError> for ApiError {
    fn from(err: HotelError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Domain(HotelError::NotFound(err)) => {
                tracing::error!(error = %err, "record not found");
            }
            Self::Domain(HotelError::Storage(err)) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
            }
            Self::Body(rejection) => {
                tracing::error!(error = %rejection.body_text(), "invalid request body");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageBody::internal_server_error()),
        )
            .into_response()
    }
}
