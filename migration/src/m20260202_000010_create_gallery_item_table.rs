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
                    .table(GalleryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryItem::Id))
                    .col(string(GalleryItem::Title))
                    .col(string_null(GalleryItem::TitleAm))
                    .col(string_null(GalleryItem::TitleOr))
                    .col(text_null(GalleryItem::Caption))
                    .col(text_null(GalleryItem::CaptionAm))
                    .col(text_null(GalleryItem::CaptionOr))
                    .col(string(GalleryItem::Kind).default("photo"))
                    .col(string(GalleryItem::MediaUrl))
                    .col(string_null(GalleryItem::ThumbnailUrl))
                    .col(boolean(GalleryItem::Featured).default(false))
                    .col(integer(GalleryItem::Position).default(0))
                    .col(string(GalleryItem::Status).default("draft"))
                    .col(integer(GalleryItem::AuthorId))
                    .col(timestamp_with_time_zone_null(GalleryItem::PublishedAt))
                    .col(timestamp_with_time_zone(GalleryItem::CreatedAt))
                    .col(timestamp_with_time_zone(GalleryItem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_item_author_id")
                            .from(GalleryItem::Table, GalleryItem::AuthorId)
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
                    .name("idx_gallery_item_status_position")
                    .table(GalleryItem::Table)
                    .col(GalleryItem::Status)
                    .col(GalleryItem::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GalleryItem {
    Table,
    Id,
    Title,
    TitleAm,
    TitleOr,
    Caption,
    CaptionAm,
    CaptionOr,
    Kind,
    MediaUrl,
    ThumbnailUrl,
    Featured,
    Position,
    Status,
    AuthorId,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
