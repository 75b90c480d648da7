use database::{DatabaseError, Filter, Repository, Tracking};
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use super::ensure_id;
use crate::entity::{villa, villa_number};
use crate::error::{VillaError, VillaResult};
use crate::models::{VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto, now};
use crate::patch::PatchDocument;

/// Villa number use cases; every write checks the owning villa exists.
#[derive(Clone)]
pub struct VillaNumberService<R, V>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    repository: Arc<R>,
    villas: Arc<V>,
}

impl<R, V> VillaNumberService<R, V>
where
    R: Repository<villa_number::Entity>,
    V: Repository<villa::Entity>,
{
    pub fn new(repository: R, villas: V) -> Self {
        Self {
            repository: Arc::new(repository),
            villas: Arc::new(villas),
        }
    }

    pub async fn list_villa_numbers(&self) -> VillaResult<Vec<VillaNumberDto>> {
        let numbers = self.repository.get_all(None).await?;
        debug!(count = numbers.len(), "Listed villa numbers");
        Ok(numbers.into_iter().map(VillaNumberDto::from).collect())
    }

    pub async fn get_villa_number(&self, villa_no: i32) -> VillaResult<VillaNumberDto> {
        ensure_id(villa_no)?;
        self.find(villa_no, Tracking::Tracked)
            .await?
            .map(VillaNumberDto::from)
            .ok_or(VillaError::VillaNumberNotFound(villa_no))
    }

    pub async fn create_villa_number(
        &self,
        input: VillaNumberCreateDto,
    ) -> VillaResult<VillaNumberDto> {
        input.validate()?;

        if self.find(input.villa_no, Tracking::Untracked).await?.is_some() {
            return Err(VillaError::DuplicateVillaNumber);
        }
        self.ensure_villa(input.villa_id).await?;

        let number = self
            .repository
            .create(input.into_model(now()))
            .await
            .map_err(|e| match e {
                DatabaseError::UniqueViolation(_) => VillaError::DuplicateVillaNumber,
                DatabaseError::ForeignKeyViolation(_) => VillaError::InvalidVillaId,
                other => VillaError::Store(other),
            })?;

        info!(
            villa_no = number.villa_no,
            villa_id = number.villa_id,
            "Created villa number"
        );
        Ok(number.into())
    }

    pub async fn delete_villa_number(&self, villa_no: i32) -> VillaResult<()> {
        ensure_id(villa_no)?;
        let number = self
            .find(villa_no, Tracking::Tracked)
            .await?
            .ok_or(VillaError::VillaNumberNotFound(villa_no))?;

        self.repository.remove(number).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => VillaError::VillaNumberNotFound(villa_no),
            other => VillaError::Store(other),
        })?;

        info!(villa_no, "Deleted villa number");
        Ok(())
    }

    pub async fn update_villa_number(
        &self,
        villa_no: i32,
        input: VillaNumberUpdateDto,
    ) -> VillaResult<VillaNumberDto> {
        ensure_id(villa_no)?;
        if input.villa_no != villa_no {
            return Err(VillaError::IdMismatch {
                route: villa_no,
                body: input.villa_no,
            });
        }
        input.validate()?;
        self.ensure_villa(input.villa_id).await?;

        let existing = self
            .find(villa_no, Tracking::Untracked)
            .await?
            .ok_or(VillaError::VillaNumberNotFound(villa_no))?;

        let number = self.store(villa_no, input, existing).await?;
        info!(villa_no, villa_id = number.villa_id, "Updated villa number");
        Ok(number)
    }

    pub async fn patch_villa_number(
        &self,
        villa_no: i32,
        document: PatchDocument,
    ) -> VillaResult<VillaNumberDto> {
        ensure_id(villa_no)?;
        let existing = self
            .find(villa_no, Tracking::Untracked)
            .await?
            .ok_or(VillaError::VillaNumberPatchTargetMissing(villa_no))?;

        let patched = document.apply_to(&VillaNumberUpdateDto::from(existing.clone()))?;
        patched.validate()?;
        if patched.villa_no != villa_no {
            return Err(VillaError::IdMismatch {
                route: villa_no,
                body: patched.villa_no,
            });
        }
        if patched.villa_id != existing.villa_id {
            self.ensure_villa(patched.villa_id).await?;
        }

        let number = self.store(villa_no, patched, existing).await?;
        info!(villa_no, "Patched villa number");
        Ok(number)
    }

    async fn find(
        &self,
        villa_no: i32,
        tracking: Tracking,
    ) -> VillaResult<Option<villa_number::Model>> {
        let filter = Filter::new().eq(villa_number::Column::VillaNo, villa_no);
        Ok(self.repository.get(filter, tracking).await?)
    }

    async fn ensure_villa(&self, villa_id: i32) -> VillaResult<()> {
        let filter = Filter::new().eq(villa::Column::Id, villa_id);
        match self.villas.get(filter, Tracking::Untracked).await? {
            Some(_) => Ok(()),
            None => Err(VillaError::InvalidVillaId),
        }
    }

    async fn store(
        &self,
        villa_no: i32,
        input: VillaNumberUpdateDto,
        existing: villa_number::Model,
    ) -> VillaResult<VillaNumberDto> {
        let model = input.into_model(existing.created_date, now());
        let number = self.repository.update(model).await.map_err(|e| match e {
            DatabaseError::ForeignKeyViolation(_) => VillaError::InvalidVillaId,
            DatabaseError::NotFound(_) => VillaError::VillaNumberNotFound(villa_no),
            other => VillaError::Store(other),
        })?;
        Ok(number.into())
    }
}
