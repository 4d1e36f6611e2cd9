use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(BookOrder::Id))
                    .col(integer_null(BookOrder::UserId))
                    .col(string(BookOrder::CustomerName))
                    .col(string(BookOrder::CustomerEmail))
                    .col(string(BookOrder::ItemTitle))
                    .col(integer(BookOrder::Quantity))
                    .col(big_integer(BookOrder::UnitPriceCents))
                    .col(big_integer(BookOrder::TotalCents))
                    .col(string(BookOrder::Currency).default("ETB"))
                    .col(text(BookOrder::ShippingAddress))
                    .col(string(BookOrder::Status).default("pending"))
                    .col(timestamp_with_time_zone_null(BookOrder::PaidAt))
                    .col(timestamp_with_time_zone(BookOrder::CreatedAt))
                    .col(timestamp_with_time_zone(BookOrder::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_order_user_id")
                            .from(BookOrder::Table, BookOrder::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookOrder {
    Table,
    Id,
    UserId,
    CustomerName,
    CustomerEmail,
    ItemTitle,
    Quantity,
    UnitPriceCents,
    TotalCents,
    Currency,
    ShippingAddress,
    Status,
    PaidAt,
    CreatedAt,
    UpdatedAt,
}
