//! Generic CRUD repository over SeaORM entities.
//!
//! One trait, [`Repository`], parameterized by entity type. Queries are
//! expressed as a typed [`Filter`] (column, comparator, value) so the same
//! lookup runs against PostgreSQL ([`BaseRepository`]) or the in-process
//! store ([`InMemoryRepository`]).

mod base;
mod filter;
mod memory;

pub use base::BaseRepository;
pub use filter::{Comparator, Criterion, Filter};
pub use memory::InMemoryRepository;

use async_trait::async_trait;
use sea_orm::EntityTrait;

use crate::common::DatabaseResult;

/// Integer primary key access for models stored by [`InMemoryRepository`].
pub trait Identifiable {
    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);
}

/// Whether a fetched row should stay linked to the store's change tracking.
///
/// SeaORM hands out detached models either way, so both variants return an
/// owned snapshot. Read-then-patch flows still ask for `Untracked` so the
/// intent survives a back end with identity tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tracking {
    #[default]
    Tracked,
    Untracked,
}

/// CRUD facade over one entity type.
///
/// Every call is a single implicit transaction. There is no optimistic
/// concurrency check: the last `update` wins.
#[async_trait]
pub trait Repository<E: EntityTrait>: Send + Sync {
    /// Every row matching `filter` (all rows when `None`), ordered by primary key.
    async fn get_all(&self, filter: Option<Filter<E::Column>>) -> DatabaseResult<Vec<E::Model>>;

    /// First row matching `filter`.
    async fn get(
        &self,
        filter: Filter<E::Column>,
        tracking: Tracking,
    ) -> DatabaseResult<Option<E::Model>>;

    /// Insert a new row and return it as stored.
    ///
    /// Generated keys are assigned by the store; the incoming id is ignored.
    async fn create(&self, model: E::Model) -> DatabaseResult<E::Model>;

    /// Delete a row previously returned by `get`.
    async fn remove(&self, model: E::Model) -> DatabaseResult<()>;

    /// Replace every column of the row with the model's primary key.
    async fn update(&self, model: E::Model) -> DatabaseResult<E::Model>;
}
