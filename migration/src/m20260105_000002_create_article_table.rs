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
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(string_uniq(Article::Slug))
                    .col(string(Article::Kind).default("article"))
                    .col(string(Article::Title))
                    .col(string_null(Article::TitleAm))
                    .col(string_null(Article::TitleOr))
                    .col(string_null(Article::Excerpt))
                    .col(string_null(Article::ExcerptAm))
                    .col(string_null(Article::ExcerptOr))
                    .col(text(Article::Content))
                    .col(text_null(Article::ContentAm))
                    .col(text_null(Article::ContentOr))
                    .col(string_null(Article::CoverImage))
                    .col(string(Article::Status).default("draft"))
                    .col(boolean(Article::Featured).default(false))
                    .col(boolean(Article::IsPremium).default(false))
                    .col(integer(Article::AuthorId))
                    .col(integer(Article::ViewCount).default(0))
                    .col(integer(Article::LikeCount).default(0))
                    .col(timestamp_with_time_zone_null(Article::PublishedAt))
                    .col(timestamp_with_time_zone(Article::CreatedAt))
                    .col(timestamp_with_time_zone(Article::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_author_id")
                            .from(Article::Table, Article::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_status_created_at")
                    .table(Article::Table)
                    .col(Article::Status)
                    .col(Article::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Slug,
    Kind,
    Title,
    TitleAm,
    TitleOr,
    Excerpt,
    ExcerptAm,
    ExcerptOr,
    Content,
    ContentAm,
    ContentOr,
    CoverImage,
    Status,
    Featured,
    IsPremium,
    AuthorId,
    ViewCount,
    LikeCount,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
