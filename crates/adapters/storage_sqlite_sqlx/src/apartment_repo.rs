//! `SQLite` implementation of [`ApartmentRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hotel_app::ports::ApartmentRepository;
use hotel_domain::apartment::{Apartment, ApartmentPatch, NewApartment};
use hotel_domain::error::HotelError;
use hotel_domain::id::ApartmentId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Apartment`].
struct Wrapper(Apartment);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Apartment> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Apartment {
            id: ApartmentId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price_per_night: row.try_get("price_per_night")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO apartments (name, description, price_per_night) VALUES (?, ?, ?) \
     RETURNING id, name, description, price_per_night";
const SELECT_ALL: &str = "SELECT id, name, description, price_per_night FROM apartments";
const SELECT_BY_ID: &str =
    "SELECT id, name, description, price_per_night FROM apartments WHERE id = ? LIMIT 1";
// Each column takes a (supplied, value) pair; a supplied NULL hits the NOT NULL constraint.
const UPDATE: &str = "UPDATE apartments SET \
     name = CASE WHEN ? THEN ? ELSE name END, \
     description = CASE WHEN ? THEN ? ELSE description END, \
     price_per_night = CASE WHEN ? THEN ? ELSE price_per_night END \
     WHERE id = ? \
     RETURNING id, name, description, price_per_night";
const DELETE_BY_ID: &str =
    "DELETE FROM apartments WHERE id = ? RETURNING id, name, description, price_per_night";

/// `SQLite`-backed apartment repository.
pub struct SqliteApartmentRepository {
    pool: SqlitePool,
}

impl SqliteApartmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ApartmentRepository for SqliteApartmentRepository {
    fn create(
        &self,
        apartment: NewApartment,
    ) -> impl Future<Output = Result<Apartment, HotelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(apartment.name)
                .bind(apartment.description)
                .bind(apartment.price_per_night)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Apartment>, HotelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(
        &self,
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(patch.name.is_some())
                .bind(patch.name.flatten())
                .bind(patch.description.is_some())
                .bind(patch.description.flatten())
                .bind(patch.price_per_night.is_some())
                .bind(patch.price_per_night.flatten())
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
