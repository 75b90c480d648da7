use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Villas::Table)
                    .if_not_exists()
                    .col(pk_auto(Villas::Id))
                    .col(string(Villas::Name))
                    .col(text(Villas::Details).default(""))
                    .col(double(Villas::Rate).default(0.0))
                    .col(integer(Villas::Sqft).default(0))
                    .col(integer(Villas::Occupancy).default(0))
                    .col(string(Villas::ImageUrl).default(""))
                    .col(string(Villas::Amenity).default(""))
                    .col(
                        timestamp_with_time_zone(Villas::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Villas::UpdatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Names are unique regardless of case
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_villas_name_lower ON villas (lower(name))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_villas_name_lower")
            .await?;

        manager
            .drop_table(Table::drop().table(Villas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Villas {
    Table,
    Id,
    Name,
    Details,
    Rate,
    Sqft,
    Occupancy,
    ImageUrl,
    Amenity,
    CreatedDate,
    UpdatedDate,
}
