use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentTag::Table)
                    .if_not_exists()
                    .col(pk_auto(ContentTag::Id))
                    .col(string(ContentTag::Scope))
                    .col(integer(ContentTag::ItemId))
                    .col(string(ContentTag::Tag))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_tag_scope_item_tag")
                    .table(ContentTag::Table)
                    .col(ContentTag::Scope)
                    .col(ContentTag::ItemId)
                    .col(ContentTag::Tag)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_tag_scope_tag")
                    .table(ContentTag::Table)
                    .col(ContentTag::Scope)
                    .col(ContentTag::Tag)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContentTag {
    Table,
    Id,
    Scope,
    ItemId,
    Tag,
}
