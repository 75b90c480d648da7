//! Store implementations the services run against.
//!
//! Both resources share the generic [`database::Repository`] contract; the
//! aliases below pick the SeaORM-backed or in-memory variant.

use database::{BaseRepository, InMemoryRepository};

use crate::entity::{villa, villa_number};

pub type PgVillaRepository = BaseRepository<villa::Entity>;
pub type PgVillaNumberRepository = BaseRepository<villa_number::Entity>;

pub type InMemoryVillaRepository = InMemoryRepository<villa::Entity>;
pub type InMemoryVillaNumberRepository = InMemoryRepository<villa_number::Entity>;

#[cfg(test)]
pub mod mock {
    use async_trait::async_trait;
    use database::{DatabaseResult, Filter, Repository, Tracking};
    use mockall::mock;

    use crate::entity::{villa, villa_number};

    mock! {
        pub VillaStore {}

        #[async_trait]
        impl Repository<villa::Entity> for VillaStore {
            async fn get_all(&self, filter: Option<Filter<villa::Column>>) -> DatabaseResult<Vec<villa::Model>>;
            async fn get(&self, filter: Filter<villa::Column>, tracking: Tracking) -> DatabaseResult<Option<villa::Model>>;
            async fn create(&self, model: villa::Model) -> DatabaseResult<villa::Model>;
            async fn remove(&self, model: villa::Model) -> DatabaseResult<()>;
            async fn update(&self, model: villa::Model) -> DatabaseResult<villa::Model>;
        }
    }

    mock! {
        pub VillaNumberStore {}

        #[async_trait]
        impl Repository<villa_number::Entity> for VillaNumberStore {
            async fn get_all(&self, filter: Option<Filter<villa_number::Column>>) -> DatabaseResult<Vec<villa_number::Model>>;
            async fn get(&self, filter: Filter<villa_number::Column>, tracking: Tracking) -> DatabaseResult<Option<villa_number::Model>>;
            async fn create(&self, model: villa_number::Model) -> DatabaseResult<villa_number::Model>;
            async fn remove(&self, model: villa_number::Model) -> DatabaseResult<()>;
            async fn update(&self, model: villa_number::Model) -> DatabaseResult<villa_number::Model>;
        }
    }
}
