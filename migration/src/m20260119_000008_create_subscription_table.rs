use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260119_000007_create_plan_table::Plan};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(integer(Subscription::UserId))
                    .col(integer(Subscription::PlanId))
                    .col(string(Subscription::Status).default("pending"))
                    .col(timestamp_with_time_zone_null(Subscription::StartedAt))
                    .col(timestamp_with_time_zone_null(Subscription::EndsAt))
                    .col(timestamp_with_time_zone_null(Subscription::CancelledAt))
                    .col(timestamp_with_time_zone(Subscription::CreatedAt))
                    .col(timestamp_with_time_zone(Subscription::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_user_id")
                            .from(Subscription::Table, Subscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_plan_id")
                            .from(Subscription::Table, Subscription::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    UserId,
    PlanId,
    Status,
    StartedAt,
    EndsAt,
    CancelledAt,
    CreatedAt,
    UpdatedAt,
}
