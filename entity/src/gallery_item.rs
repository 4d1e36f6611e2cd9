use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gallery_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption_am: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption_or: Option<String>,
    /// `photo` or `video`.
    pub kind: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    /// Manual ordering within the gallery, lowest first.
    pub position: i32,
    pub status: String,
    pub author_id: i32,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
