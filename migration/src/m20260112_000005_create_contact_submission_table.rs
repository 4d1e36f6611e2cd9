use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactSubmission::Id))
                    .col(string(ContactSubmission::Name))
                    .col(string(ContactSubmission::Email))
                    .col(string_null(ContactSubmission::Phone))
                    .col(string_null(ContactSubmission::Subject))
                    .col(text(ContactSubmission::Message))
                    .col(string(ContactSubmission::Status).default("new"))
                    .col(text_null(ContactSubmission::Reply))
                    .col(timestamp_with_time_zone_null(ContactSubmission::RepliedAt))
                    .col(integer_null(ContactSubmission::RepliedBy))
                    .col(timestamp_with_time_zone(ContactSubmission::CreatedAt))
                    .col(timestamp_with_time_zone(ContactSubmission::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactSubmission {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Status,
    Reply,
    RepliedAt,
    RepliedBy,
    CreatedAt,
    UpdatedAt,
}
