use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_villas::Villas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VillaNumbers::Table)
                    .if_not_exists()
                    // Caller-assigned, not generated
                    .col(integer(VillaNumbers::VillaNo).primary_key())
                    .col(integer(VillaNumbers::VillaId))
                    .col(string(VillaNumbers::SpecialDetails).default(""))
                    .col(
                        timestamp_with_time_zone(VillaNumbers::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(VillaNumbers::UpdatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_villa_numbers_villa_id")
                            .from(VillaNumbers::Table, VillaNumbers::VillaId)
                            .to(Villas::Table, Villas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_villa_numbers_villa_id")
                    .table(VillaNumbers::Table)
                    .col(VillaNumbers::VillaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VillaNumbers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VillaNumbers {
    Table,
    VillaNo,
    VillaId,
    SpecialDetails,
    CreatedDate,
    UpdatedDate,
}
