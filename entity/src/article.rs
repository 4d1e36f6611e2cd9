use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    /// `article` or `blog`.
    pub kind: String,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_am: Option<String>,
    pub excerpt_or: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_am: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_or: Option<String>,
    pub cover_image: Option<String>,
    pub status: String,
    pub featured: bool,
    pub is_premium: bool,
    pub author_id: i32,
    pub view_count: i32,
    pub like_count: i32,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
