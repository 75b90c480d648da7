use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use sea_orm::{EntityName, EntityTrait, PrimaryKeyTrait};
use tokio::sync::RwLock;

use super::{Filter, Identifiable, Repository, Tracking};
use crate::common::{DatabaseError, DatabaseResult};

/// In-process [`Repository`] keyed by integer primary key.
///
/// Rows are kept in key order, so `get_all` matches the PostgreSQL
/// ordering. Only primary-key uniqueness is enforced; secondary unique
/// indexes and foreign keys are left to the caller.
pub struct InMemoryRepository<E: EntityTrait> {
    rows: Arc<RwLock<BTreeMap<i32, E::Model>>>,
    last_id: Arc<AtomicI32>,
}

impl<E: EntityTrait> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            last_id: Arc::clone(&self.last_id),
        }
    }
}

impl<E: EntityTrait> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            last_id: Arc::new(AtomicI32::new(0)),
        }
    }
}

impl<E> InMemoryRepository<E>
where
    E: EntityTrait,
    E::Model: Identifiable,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store. Keys are taken from the models as given.
    pub fn with_rows(rows: impl IntoIterator<Item = E::Model>) -> Self {
        let rows: BTreeMap<i32, E::Model> = rows.into_iter().map(|row| (row.id(), row)).collect();
        let last_id = rows.keys().next_back().copied().unwrap_or(0);

        Self {
            rows: Arc::new(RwLock::new(rows)),
            last_id: Arc::new(AtomicI32::new(last_id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn missing(id: i32) -> DatabaseError {
        DatabaseError::NotFound(format!("no {} row with key {id}", E::default().table_name()))
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: EntityTrait,
    E::Model: Identifiable + Sync,
{
    async fn get_all(&self, filter: Option<Filter<E::Column>>) -> DatabaseResult<Vec<E::Model>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|row| filter.as_ref().is_none_or(|filter| filter.matches(*row)))
            .cloned()
            .collect())
    }

    async fn get(
        &self,
        filter: Filter<E::Column>,
        _tracking: Tracking,
    ) -> DatabaseResult<Option<E::Model>> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|row| filter.matches(*row)).cloned())
    }

    async fn create(&self, mut model: E::Model) -> DatabaseResult<E::Model> {
        let mut rows = self.rows.write().await;

        if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
            model.set_id(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        } else if rows.contains_key(&model.id()) {
            return Err(DatabaseError::UniqueViolation(format!(
                "duplicate key {} in {}",
                model.id(),
                E::default().table_name()
            )));
        } else {
            self.last_id.fetch_max(model.id(), Ordering::SeqCst);
        }

        rows.insert(model.id(), model.clone());
        Ok(model)
    }

    async fn remove(&self, model: E::Model) -> DatabaseResult<()> {
        let id = model.id();
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::missing(id))
    }

    async fn update(&self, model: E::Model) -> DatabaseResult<E::Model> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&model.id()).ok_or_else(|| Self::missing(model.id()))?;
        *row = model.clone();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod villa_number {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "villa_numbers")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub villa_no: i32,
            pub villa_id: i32,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    mod villa {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "villas")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub name: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    impl Identifiable for villa::Model {
        fn id(&self) -> i32 {
            self.id
        }

        fn set_id(&mut self, id: i32) {
            self.id = id;
        }
    }

    impl Identifiable for villa_number::Model {
        fn id(&self) -> i32 {
            self.villa_no
        }

        fn set_id(&mut self, id: i32) {
            self.villa_no = id;
        }
    }

    fn villa(name: &str) -> villa::Model {
        villa::Model {
            id: 0,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryRepository::<villa::Entity>::new();

        let first = repo.create(villa("Royal")).await.unwrap();
        let second = repo.create(villa("Diamond")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_continue_after_seeded_rows() {
        let repo = InMemoryRepository::<villa::Entity>::with_rows([villa::Model {
            id: 5,
            name: "Royal".to_string(),
        }]);

        let created = repo.create(villa("Diamond")).await.unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn test_explicit_key_must_be_unique() {
        let repo = InMemoryRepository::<villa_number::Entity>::new();
        let row = villa_number::Model {
            villa_no: 101,
            villa_id: 1,
        };

        repo.create(row.clone()).await.unwrap();
        let err = repo.create(row).await.unwrap_err();

        assert!(matches!(err, DatabaseError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn test_get_all_applies_filter() {
        let repo = InMemoryRepository::<villa::Entity>::new();
        repo.create(villa("Royal")).await.unwrap();
        repo.create(villa("Diamond")).await.unwrap();

        let all = repo.get_all(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let filtered = repo
            .get_all(Some(Filter::new().eq_ignore_case(villa::Column::Name, "royal")))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Royal");
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let repo = InMemoryRepository::<villa::Entity>::new();
        let mut created = repo.create(villa("Royal")).await.unwrap();
        created.name = "Royal Suite".to_string();

        repo.update(created).await.unwrap();

        let stored = repo
            .get(Filter::new().eq(villa::Column::Id, 1), Tracking::Tracked)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Royal Suite");
    }

    #[tokio::test]
    async fn test_update_and_remove_missing_row_are_not_found() {
        let repo = InMemoryRepository::<villa::Entity>::new();
        let ghost = villa::Model {
            id: 9,
            name: "Ghost".to_string(),
        };

        assert!(matches!(
            repo.update(ghost.clone()).await,
            Err(DatabaseError::NotFound(_))
        ));
        assert!(matches!(
            repo.remove(ghost).await,
            Err(DatabaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::<villa::Entity>::new();
        let clone = repo.clone();

        repo.create(villa("Royal")).await.unwrap();
        assert!(!clone.is_empty().await);
    }
}
