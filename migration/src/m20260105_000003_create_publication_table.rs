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
                    .table(Publication::Table)
                    .if_not_exists()
                    .col(pk_auto(Publication::Id))
                    .col(string_uniq(Publication::Slug))
                    .col(string(Publication::Title))
                    .col(string_null(Publication::TitleAm))
                    .col(string_null(Publication::TitleOr))
                    .col(text_null(Publication::Description))
                    .col(text_null(Publication::DescriptionAm))
                    .col(text_null(Publication::DescriptionOr))
                    .col(string(Publication::Kind).default("book"))
                    .col(string_null(Publication::Publisher))
                    .col(integer_null(Publication::PublishedYear))
                    .col(string_null(Publication::FileUrl))
                    .col(string_null(Publication::CoverImage))
                    .col(boolean(Publication::IsFree).default(true))
                    .col(boolean(Publication::Featured).default(false))
                    .col(string(Publication::Status).default("draft"))
                    .col(integer(Publication::DownloadCount).default(0))
                    .col(integer(Publication::AuthorId))
                    .col(timestamp_with_time_zone_null(Publication::PublishedAt))
                    .col(timestamp_with_time_zone(Publication::CreatedAt))
                    .col(timestamp_with_time_zone(Publication::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_author_id")
                            .from(Publication::Table, Publication::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Publication {
    Table,
    Id,
    Slug,
    Title,
    TitleAm,
    TitleOr,
    Description,
    DescriptionAm,
    DescriptionOr,
    Kind,
    Publisher,
    PublishedYear,
    FileUrl,
    CoverImage,
    IsFree,
    Featured,
    Status,
    DownloadCount,
    AuthorId,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
