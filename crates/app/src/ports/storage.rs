//! Storage port: repository trait for apartment persistence.

use std::future::Future;

use hotel_domain::apartment::{Apartment, ApartmentPatch, NewApartment};
use hotel_domain::error::HotelError;
use hotel_domain::id::ApartmentId;

/// Repository for persisting and querying [`Apartment`]s.
pub trait ApartmentRepository {
    /// Insert a new apartment; storage assigns the id.
    fn create(
        &self,
        apartment: NewApartment,
    ) -> impl Future<Output = Result<Apartment, HotelError>> + Send;

    /// Get every stored apartment, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Apartment>, HotelError>> + Send;

    /// Get the first apartment matching `id`.
    fn get_by_id(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send;

    /// Overwrite the fields present in `patch`, returning the updated record
    /// or `None` when no apartment has `id`.
    fn update(
        &self,
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send;

    /// Remove an apartment, returning its last stored state or `None` when
    /// no apartment has `id`.
    fn delete(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send;
}
