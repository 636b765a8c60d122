//! Apartment service: use-cases for managing apartments.

use hotel_domain::apartment::{Apartment, ApartmentPatch, NewApartment};
use hotel_domain::error::{HotelError, NotFoundError};
use hotel_domain::id::ApartmentId;

use crate::ports::ApartmentRepository;

/// Application service for apartment CRUD operations.
pub struct ApartmentService<R> {
    repo: R,
}

impl<R: ApartmentRepository> ApartmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new apartment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, including
    /// constraint violations for missing fields.
    #[tracing::instrument(skip(self, apartment))]
    pub async fn create_apartment(&self, apartment: NewApartment) -> Result<Apartment, HotelError> {
        let created = self.repo.create(apartment).await?;
        tracing::debug!(id = %created.id, "apartment created");
        Ok(created)
    }

    /// List all apartments.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_apartments(&self) -> Result<Vec<Apartment>, HotelError> {
        self.repo.get_all().await
    }

    /// Look up an apartment by id. A missing record is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_apartment(&self, id: ApartmentId) -> Result<Option<Apartment>, HotelError> {
        self.repo.get_by_id(id).await
    }

    /// Overwrite the fields present in `patch` on an existing apartment.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when no apartment with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_apartment(
        &self,
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> Result<Apartment, HotelError> {
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete an apartment, returning its state before removal.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when no apartment with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_apartment(&self, id: ApartmentId) -> Result<Apartment, HotelError> {
        self.repo.delete(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: ApartmentId) -> HotelError {
    NotFoundError {
        entity: "Apartment",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryApartmentRepo {
        store: Mutex<BTreeMap<ApartmentId, Apartment>>,
    }

    impl ApartmentRepository for InMemoryApartmentRepo {
        fn create(
            &self,
            apartment: NewApartment,
        ) -> impl Future<Output = Result<Apartment, HotelError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store
                .last_key_value()
                .map_or(1, |(id, _)| id.as_raw() + 1);
            let created = Apartment {
                id: ApartmentId::from_raw(next),
                name: apartment.name.unwrap_or_default(),
                description: apartment.description.unwrap_or_default(),
                price_per_night: apartment.price_per_night.unwrap_or_default(),
            };
            store.insert(created.id, created.clone());
            async { Ok(created) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Apartment>, HotelError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Apartment> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: ApartmentId,
        ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: ApartmentId,
            patch: ApartmentPatch,
        ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = match store.get_mut(&id) {
                None => Ok(None),
                Some(_)
                    if patch.name == Some(None)
                        || patch.description == Some(None)
                        || patch.price_per_night == Some(None) =>
                {
                    Err(HotelError::Storage("NOT NULL constraint failed".into()))
                }
                Some(apartment) => {
                    if let Some(Some(name)) = patch.name {
                        apartment.name = name;
                    }
                    if let Some(Some(description)) = patch.description {
                        apartment.description = description;
                    }
                    if let Some(Some(price)) = patch.price_per_night {
                        apartment.price_per_night = price;
                    }
                    Ok(Some(apartment.clone()))
                }
            };
            async { result }
        }

        fn delete(
            &self,
            id: ApartmentId,
        ) -> impl Future<Output = Result<Option<Apartment>, HotelError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.remove(&id);
            async { Ok(result) }
        }
    }

    fn make_service() -> ApartmentService<InMemoryApartmentRepo> {
        ApartmentService::new(InMemoryApartmentRepo::default())
    }

    fn cozy() -> NewApartment {
        NewApartment {
            name: Some("Apartment 1".to_string()),
            description: Some("A cozy apartment with a great view".to_string()),
            price_per_night: Some(100.0),
        }
    }

    #[tokio::test]
    async fn should_create_apartment_and_assign_id() {
        let svc = make_service();

        let created = svc.create_apartment(cozy()).await.unwrap();
        assert_eq!(created.id, ApartmentId::from_raw(1));
        assert_eq!(created.name, "Apartment 1");

        let fetched = svc.find_apartment(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn should_return_none_when_apartment_missing() {
        let svc = make_service();
        let result = svc.find_apartment(ApartmentId::from_raw(7)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_apartments() {
        let svc = make_service();
        svc.create_apartment(cozy()).await.unwrap();
        svc.create_apartment(NewApartment {
            name: Some("Loft".to_string()),
            ..NewApartment::default()
        })
        .await
        .unwrap();

        let all = svc.list_apartments().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_only_patched_fields() {
        let svc = make_service();
        let created = svc.create_apartment(cozy()).await.unwrap();

        let patch = ApartmentPatch {
            price_per_night: Some(Some(150.0)),
            ..ApartmentPatch::default()
        };
        let updated = svc.update_apartment(created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, created.name);
        assert!((updated.price_per_night - 150.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_patch_clears_field() {
        let svc = make_service();
        let created = svc.create_apartment(cozy()).await.unwrap();

        let patch = ApartmentPatch {
            description: Some(None),
            ..ApartmentPatch::default()
        };
        let result = svc.update_apartment(created.id, patch).await;
        assert!(matches!(result, Err(HotelError::Storage(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_apartment() {
        let svc = make_service();
        let result = svc
            .update_apartment(ApartmentId::from_raw(99), ApartmentPatch::default())
            .await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_snapshot_when_deleting() {
        let svc = make_service();
        let created = svc.create_apartment(cozy()).await.unwrap();

        let deleted = svc.delete_apartment(created.id).await.unwrap();
        assert_eq!(deleted, created);

        let result = svc.find_apartment(created.id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_apartment() {
        let svc = make_service();
        let result = svc.delete_apartment(ApartmentId::from_raw(99)).await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
    }
}
