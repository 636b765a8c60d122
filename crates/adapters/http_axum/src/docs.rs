//! OpenAPI document generated from the handler annotations, plus a
//! Swagger UI page that renders it.

use axum::Json;
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use utoipa::{OpenApi, ToSchema};

use crate::api::MessageBody;
use crate::api::apartments::{CreateApartmentRequest, UpdateApartmentRequest};

const DOCUMENT_PATH: &str = "/api-docs/openapi.json";
const TITLE: &str = "Hotel API";
const HTML_DOC: &str = include_str!("./docs.html");

/// Schema of a stored apartment as it appears on the wire.
#[derive(ToSchema)]
#[schema(as = Apartment, rename_all = "camelCase", example = json!({
    "id": 1,
    "name": "Apartment 1",
    "description": "A cozy apartment with a great view",
    "pricePerNight": 100
}))]
#[allow(dead_code)]
pub struct ApartmentSchema {
    id: i64,
    name: String,
    description: String,
    price_per_night: f64,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel API",
        version = "1.0.0",
        description = "API for managing hotels and apartments",
    ),
    paths(
        crate::api::apartments::create,
        crate::api::apartments::list,
        crate::api::apartments::get,
        crate::api::apartments::update,
        crate::api::apartments::delete,
    ),
    components(schemas(
        ApartmentSchema,
        CreateApartmentRequest,
        UpdateApartmentRequest,
        MessageBody,
    ))
)]
pub struct ApiDoc;

/// Build the `/api-docs` routes. They need no application state.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api-docs", get(ui))
        .route(DOCUMENT_PATH, get(document))
}

/// `GET /api-docs/openapi.json`
async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `GET /api-docs`
async fn ui() -> Html<String> {
    Html(
        HTML_DOC
            .replace("{{documentPath}}", DOCUMENT_PATH)
            .replace("{{title}}", TITLE),
    )
}
