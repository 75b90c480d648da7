pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_villas;
mod m20250301_000002_create_villa_numbers;
mod m20250301_000003_seed_villas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_villas::Migration),
            Box::new(m20250301_000002_create_villa_numbers::Migration),
            Box::new(m20250301_000003_seed_villas::Migration),
        ]
    }
}
