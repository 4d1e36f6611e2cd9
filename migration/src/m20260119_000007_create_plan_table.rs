use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(pk_auto(Plan::Id))
                    .col(string_uniq(Plan::Slug))
                    .col(string(Plan::Name))
                    .col(string_null(Plan::NameAm))
                    .col(string_null(Plan::NameOr))
                    .col(text_null(Plan::Description))
                    .col(big_integer(Plan::PriceCents))
                    .col(string(Plan::Currency).default("ETB"))
                    .col(string(Plan::Interval).default("monthly"))
                    .col(boolean(Plan::IsActive).default(true))
                    .col(timestamp_with_time_zone(Plan::CreatedAt))
                    .col(timestamp_with_time_zone(Plan::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plan {
    Table,
    Id,
    Slug,
    Name,
    NameAm,
    NameOr,
    Description,
    PriceCents,
    Currency,
    Interval,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
