//! JSON REST handlers for apartments.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use hotel_app::ports::ApartmentRepository;
use hotel_domain::apartment::{Apartment, ApartmentPatch, NewApartment};
use hotel_domain::error::{HotelError, NotFoundError};
use hotel_domain::id::ApartmentId;

use crate::api::MessageBody;
use crate::docs::ApartmentSchema;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an apartment.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Apartment 1",
    "description": "A cozy apartment with a great view",
    "pricePerNight": 100
}))]
pub struct CreateApartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
}

impl From<CreateApartmentRequest> for NewApartment {
    fn from(req: CreateApartmentRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price_per_night: req.price_per_night,
        }
    }
}

/// Request body for updating an apartment.
///
/// Absent fields keep their stored value; a field sent as `null` is
/// forwarded as a write of null.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "pricePerNight": 150 }))]
#[allow(clippy::option_option)]
pub struct UpdateApartmentRequest {
    #[serde(default, deserialize_with = "supplied")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    #[schema(value_type = Option<f64>)]
    pub price_per_night: Option<Option<f64>>,
}

// Any key present in the body is `Some`, even when its value is `null`.
#[allow(clippy::option_option)]
fn supplied<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateApartmentRequest> for ApartmentPatch {
    fn from(req: UpdateApartmentRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price_per_night: req.price_per_night,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Apartment>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint. A miss is `null`, not an error.
pub enum GetResponse {
    Ok(Json<Option<Apartment>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, update and delete endpoints.
pub enum RecordResponse {
    Ok(Json<Apartment>),
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

// Path ids without leading digits match nothing; update and delete report that as not found.
fn require_id(raw: &str) -> Result<ApartmentId, ApiError> {
    ApartmentId::parse_leading(raw).ok_or_else(|| {
        ApiError::from(HotelError::from(NotFoundError {
            entity: "Apartment",
            id: raw.to_string(),
        }))
    })
}

/// `POST /apartments`
#[utoipa::path(
    post,
    path = "/apartments",
    summary = "Create a new apartment",
    request_body = CreateApartmentRequest,
    responses(
        (status = 200, description = "The created apartment", body = ApartmentSchema),
        (status = 500, description = "Internal Server Error", body = MessageBody),
    )
)]
pub async fn create<AR>(
    State(state): State<AppState<AR>>,
    payload: Result<Json<CreateApartmentRequest>, JsonRejection>,
) -> Result<RecordResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    tracing::info!(body = ?req, "create apartment");
    let created = state.apartment_service.create_apartment(req.into()).await?;
    Ok(RecordResponse::Ok(Json(created)))
}

/// `GET /apartments`
#[utoipa::path(
    get,
    path = "/apartments",
    summary = "Retrieve a list of all apartments",
    responses(
        (status = 200, description = "A list of apartments", body = Vec<ApartmentSchema>),
        (status = 500, description = "Internal Server Error", body = MessageBody),
    )
)]
pub async fn list<AR>(State(state): State<AppState<AR>>) -> Result<ListResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    let apartments = state.apartment_service.list_apartments().await?;
    Ok(ListResponse::Ok(Json(apartments)))
}

/// `GET /apartments/{id}`
#[utoipa::path(
    get,
    path = "/apartments/{id}",
    summary = "Retrieve an apartment by ID",
    params(("id" = i64, Path, description = "ID of the apartment to retrieve")),
    responses(
        (status = 200, description = "The requested apartment, or null", body = Option<ApartmentSchema>),
        (status = 500, description = "Internal Server Error", body = MessageBody),
    )
)]
pub async fn get<AR>(
    State(state): State<AppState<AR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    let found = match ApartmentId::parse_leading(&id) {
        Some(id) => state.apartment_service.find_apartment(id).await?,
        None => None,
    };
    Ok(GetResponse::Ok(Json(found)))
}

/// `PATCH /apartments/{id}`
#[utoipa::path(
    patch,
    path = "/apartments/{id}",
    summary = "Update an apartment by ID",
    params(("id" = i64, Path, description = "ID of the apartment to update")),
    request_body = UpdateApartmentRequest,
    responses(
        (status = 200, description = "The updated apartment", body = ApartmentSchema),
        (status = 500, description = "Internal Server Error", body = MessageBody),
    )
)]
pub async fn update<AR>(
    State(state): State<AppState<AR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateApartmentRequest>, JsonRejection>,
) -> Result<RecordResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    let req = match payload {
        Ok(Json(req)) => req,
        // A body without a JSON content type is not parsed and patches nothing.
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateApartmentRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    tracing::info!(%id, body = ?req, "update apartment");
    let id = require_id(&id)?;
    let updated = state
        .apartment_service
        .update_apartment(id, req.into())
        .await?;
    Ok(RecordResponse::Ok(Json(updated)))
}

/// `DELETE /apartments/{id}`
#[utoipa::path(
    delete,
    path = "/apartments/{id}",
    summary = "Delete an apartment by ID",
    params(("id" = i64, Path, description = "ID of the apartment to delete")),
    responses(
        (status = 200, description = "The deleted apartment", body = ApartmentSchema),
        (status = 500, description = "Internal Server Error", body = MessageBody),
    )
)]
pub async fn delete<AR>(
    State(state): State<AppState<AR>>,
    Path(id): Path<String>,
) -> Result<RecordResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
{
    let id = require_id(&id)?;
    let deleted = state.apartment_service.delete_apartment(id).await?;
    Ok(RecordResponse::Ok(Json(deleted)))
}
