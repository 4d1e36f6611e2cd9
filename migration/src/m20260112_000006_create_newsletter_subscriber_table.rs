use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsletterSubscriber::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsletterSubscriber::Id))
                    .col(string_uniq(NewsletterSubscriber::Email))
                    .col(string_null(NewsletterSubscriber::Name))
                    .col(string(NewsletterSubscriber::Locale).default("en"))
                    .col(string(NewsletterSubscriber::Status).default("subscribed"))
                    .col(string_null(NewsletterSubscriber::Source))
                    .col(timestamp_with_time_zone(NewsletterSubscriber::SubscribedAt))
                    .col(timestamp_with_time_zone_null(
                        NewsletterSubscriber::UnsubscribedAt,
                    ))
                    .col(timestamp_with_time_zone(NewsletterSubscriber::CreatedAt))
                    .col(timestamp_with_time_zone(NewsletterSubscriber::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsletterSubscriber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsletterSubscriber {
    Table,
    Id,
    Email,
    Name,
    Locale,
    Status,
    Source,
    SubscribedAt,
    UnsubscribedAt,
    CreatedAt,
    UpdatedAt,
}
