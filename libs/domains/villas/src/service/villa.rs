use database::{DatabaseError, Filter, Repository, Tracking};
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use super::ensure_id;
use crate::entity::villa;
use crate::error::{VillaError, VillaResult};
use crate::models::{VillaCreateDto, VillaDto, VillaUpdateDto, now};
use crate::patch::PatchDocument;

/// Villa use cases on top of a [`Repository`].
#[derive(Clone)]
pub struct VillaService<R: Repository<villa::Entity>> {
    repository: Arc<R>,
}

impl<R: Repository<villa::Entity>> VillaService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_villas(&self) -> VillaResult<Vec<VillaDto>> {
        let villas = self.repository.get_all(None).await?;
        debug!(count = villas.len(), "Listed villas");
        Ok(villas.into_iter().map(VillaDto::from).collect())
    }

    pub async fn get_villa(&self, id: i32) -> VillaResult<VillaDto> {
        ensure_id(id)?;
        self.find(id, Tracking::Tracked)
            .await?
            .map(VillaDto::from)
            .ok_or(VillaError::NotFound(id))
    }

    /// Create a villa; names are unique ignoring case.
    pub async fn create_villa(&self, input: VillaCreateDto) -> VillaResult<VillaDto> {
        input.validate()?;

        let same_name = Filter::new().eq_ignore_case(villa::Column::Name, input.name.as_str());
        if self
            .repository
            .get(same_name, Tracking::Untracked)
            .await?
            .is_some()
        {
            return Err(VillaError::DuplicateName);
        }

        // The unique index still catches a concurrent insert of the same name.
        let villa = self
            .repository
            .create(input.into_model(now()))
            .await
            .map_err(|e| match e {
                DatabaseError::UniqueViolation(_) => VillaError::DuplicateName,
                other => VillaError::Store(other),
            })?;

        info!(villa_id = villa.id, name = %villa.name, "Created villa");
        Ok(villa.into())
    }

    pub async fn delete_villa(&self, id: i32) -> VillaResult<()> {
        ensure_id(id)?;
        let villa = self
            .find(id, Tracking::Tracked)
            .await?
            .ok_or(VillaError::NotFound(id))?;

        self.repository.remove(villa).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => VillaError::NotFound(id),
            other => VillaError::Store(other),
        })?;

        info!(villa_id = id, "Deleted villa");
        Ok(())
    }

    /// Replace every field of villa `id` with `input`.
    pub async fn update_villa(&self, id: i32, input: VillaUpdateDto) -> VillaResult<VillaDto> {
        ensure_id(id)?;
        if input.id != id {
            return Err(VillaError::IdMismatch {
                route: id,
                body: input.id,
            });
        }
        input.validate()?;

        let existing = self
            .find(id, Tracking::Untracked)
            .await?
            .ok_or(VillaError::NotFound(id))?;

        let villa = self.store(id, input, existing).await?;
        info!(villa_id = id, "Updated villa");
        Ok(villa)
    }

    /// Apply a JSON Patch to villa `id`.
    ///
    /// The patched result is validated before anything is written, and it
    /// may not change the id.
    pub async fn patch_villa(&self, id: i32, document: PatchDocument) -> VillaResult<VillaDto> {
        ensure_id(id)?;
        let existing = self
            .find(id, Tracking::Untracked)
            .await?
            .ok_or(VillaError::PatchTargetMissing(id))?;

        let patched = document.apply_to(&VillaUpdateDto::from(existing.clone()))?;
        patched.validate()?;
        if patched.id != id {
            return Err(VillaError::IdMismatch {
                route: id,
                body: patched.id,
            });
        }

        let villa = self.store(id, patched, existing).await?;
        info!(villa_id = id, operations = document.operations().len(), "Patched villa");
        Ok(villa)
    }

    async fn find(&self, id: i32, tracking: Tracking) -> VillaResult<Option<villa::Model>> {
        let filter = Filter::new().eq(villa::Column::Id, id);
        Ok(self.repository.get(filter, tracking).await?)
    }

    /// A rename may not collide, ignoring case, with another villa.
    async fn ensure_name_free(&self, id: i32, name: &str, current: &str) -> VillaResult<()> {
        if name.to_lowercase() == current.to_lowercase() {
            return Ok(());
        }

        let clash = Filter::new()
            .eq_ignore_case(villa::Column::Name, name)
            .ne(villa::Column::Id, id);
        match self.repository.get(clash, Tracking::Untracked).await? {
            Some(other) => {
                debug!(villa_id = id, other_id = other.id, "Rename collides with existing villa");
                Err(VillaError::DuplicateName)
            }
            None => Ok(()),
        }
    }

    async fn store(
        &self,
        id: i32,
        input: VillaUpdateDto,
        existing: villa::Model,
    ) -> VillaResult<VillaDto> {
        self.ensure_name_free(id, &input.name, &existing.name).await?;

        let model = input.into_model(existing.created_date, now());
        let villa = self
            .repository
            .update(model)
            .await
            .map_err(|e| match e {
                DatabaseError::UniqueViolation(_) => VillaError::DuplicateName,
                DatabaseError::NotFound(_) => VillaError::NotFound(id),
                other => VillaError::Store(other),
            })?;
        Ok(villa.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchOperation;
    use crate::repository::mock::MockVillaStore;
    use serde_json::json;

    fn villa(id: i32, name: &str) -> villa::Model {
        let stamp = now();
        villa::Model {
            id,
            name: name.to_string(),
            details: String::new(),
            rate: 200.0,
            sqft: 550,
            occupancy: 4,
            image_url: String::new(),
            amenity: String::new(),
            created_date: stamp,
            updated_date: stamp,
        }
    }

    #[tokio::test]
    async fn test_non_positive_id_never_reaches_store() {
        // No expectations: any repository call would panic.
        let service = VillaService::new(MockVillaStore::new());

        assert!(matches!(
            service.get_villa(0).await,
            Err(VillaError::InvalidId(0))
        ));
        assert!(matches!(
            service.delete_villa(-3).await,
            Err(VillaError::InvalidId(-3))
        ));
        assert!(matches!(
            service.patch_villa(0, PatchDocument::default()).await,
            Err(VillaError::InvalidId(0))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_existing_name() {
        let mut store = MockVillaStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(villa(1, "Royal Villa"))));
        store.expect_create().never();

        let service = VillaService::new(store);
        let result = service
            .create_villa(VillaCreateDto {
                name: "ROYAL VILLA".into(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(VillaError::DuplicateName)));
    }

    #[tokio::test]
    async fn test_create_maps_unique_violation_to_duplicate() {
        let mut store = MockVillaStore::new();
        store.expect_get().returning(|_, _| Ok(None));
        store.expect_create().returning(|_| {
            Err(DatabaseError::UniqueViolation(
                "idx_villas_name_lower".into(),
            ))
        });

        let service = VillaService::new(store);
        let result = service
            .create_villa(VillaCreateDto {
                name: "Beach House".into(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(VillaError::DuplicateName)));
    }

    #[tokio::test]
    async fn test_update_rejects_id_mismatch_without_lookup() {
        let service = VillaService::new(MockVillaStore::new());
        let result = service
            .update_villa(
                2,
                VillaUpdateDto {
                    id: 3,
                    name: "Royal Villa".into(),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(VillaError::IdMismatch { route: 2, body: 3 })
        ));
    }

    #[tokio::test]
    async fn test_update_preserves_created_date() {
        let original = villa(2, "Premium Pool Villa");
        let created = original.created_date;

        let mut store = MockVillaStore::new();
        let found = original.clone();
        store
            .expect_get()
            .returning(move |_, _| Ok(Some(found.clone())));
        store
            .expect_update()
            .withf(move |model| model.created_date == created && model.rate == 320.0)
            .returning(|model| Ok(model));

        let service = VillaService::new(store);
        let updated = service
            .update_villa(
                2,
                VillaUpdateDto {
                    id: 2,
                    name: "Premium Pool Villa".into(),
                    rate: 320.0,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.rate, 320.0);
    }

    #[tokio::test]
    async fn test_rename_to_existing_name_is_rejected() {
        let mut store = MockVillaStore::new();
        let mut lookups = 0;
        store.expect_get().times(2).returning(move |_, _| {
            lookups += 1;
            Ok(Some(if lookups == 1 {
                villa(2, "Premium Pool Villa")
            } else {
                villa(1, "Royal Villa")
            }))
        });
        store.expect_update().never();

        let service = VillaService::new(store);
        let result = service
            .update_villa(
                2,
                VillaUpdateDto {
                    id: 2,
                    name: "ROYAL VILLA".into(),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(VillaError::DuplicateName)));
    }

    #[tokio::test]
    async fn test_invalid_patch_is_not_persisted() {
        let mut store = MockVillaStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(villa(1, "Royal Villa"))));
        store.expect_update().never();

        let service = VillaService::new(store);
        let document = PatchDocument::new(vec![PatchOperation::Replace {
            path: "/name".into(),
            value: json!(""),
        }]);

        let result = service.patch_villa(1, document).await;
        assert!(matches!(result, Err(VillaError::Validation(_))));
    }

    #[tokio::test]
    async fn test_patch_cannot_change_id() {
        let mut store = MockVillaStore::new();
        store
            .expect_get()
            .returning(|_, _| Ok(Some(villa(1, "Royal Villa"))));
        store.expect_update().never();

        let service = VillaService::new(store);
        let document = PatchDocument::new(vec![PatchOperation::Replace {
            path: "/id".into(),
            value: json!(5),
        }]);

        let result = service.patch_villa(1, document).await;
        assert!(matches!(
            result,
            Err(VillaError::IdMismatch { route: 1, body: 5 })
        ));
    }

    #[tokio::test]
    async fn test_patch_on_missing_villa_is_bad_request() {
        let mut store = MockVillaStore::new();
        store.expect_get().returning(|_, _| Ok(None));

        let service = VillaService::new(store);
        let result = service.patch_villa(42, PatchDocument::default()).await;

        assert!(matches!(result, Err(VillaError::PatchTargetMissing(42))));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_error() {
        let mut store = MockVillaStore::new();
        store
            .expect_get_all()
            .returning(|_| Err(DatabaseError::HealthCheckFailed("pool closed".into())));

        let service = VillaService::new(store);
        assert!(matches!(
            service.list_villas().await,
            Err(VillaError::Store(_))
        ));
    }
}
