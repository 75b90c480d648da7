use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityName, EntityTrait,
    IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder,
};
use tracing::trace;

use super::{Filter, Repository, Tracking};
use crate::common::{DatabaseError, DatabaseResult};

/// PostgreSQL-backed [`Repository`] for any SeaORM entity.
///
/// ```ignore
/// let villas = BaseRepository::<villa::Entity>::new(db.clone());
/// let all = villas.get_all(None).await?;
/// ```
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl<E> Repository<E> for BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    async fn get_all(&self, filter: Option<Filter<E::Column>>) -> DatabaseResult<Vec<E::Model>> {
        let mut query = E::find();
        if let Some(filter) = filter {
            query = query.filter(filter.into_condition());
        }
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        Ok(query.all(&self.db).await?)
    }

    async fn get(
        &self,
        filter: Filter<E::Column>,
        tracking: Tracking,
    ) -> DatabaseResult<Option<E::Model>> {
        trace!(?tracking, table = E::default().table_name(), "Fetching single row");
        Ok(E::find()
            .filter(filter.into_condition())
            .one(&self.db)
            .await?)
    }

    async fn create(&self, model: E::Model) -> DatabaseResult<E::Model> {
        let mut active = model.into_active_model().reset_all();
        if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
            for key in E::PrimaryKey::iter() {
                active.not_set(key.into_column());
            }
        }

        Ok(active.insert(&self.db).await?)
    }

    async fn remove(&self, model: E::Model) -> DatabaseResult<()> {
        let result = model.delete(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!(
                "no {} row matched the primary key",
                E::default().table_name()
            )));
        }
        Ok(())
    }

    async fn update(&self, model: E::Model) -> DatabaseResult<E::Model> {
        Ok(model
            .into_active_model()
            .reset_all()
            .update(&self.db)
            .await?)
    }
}
