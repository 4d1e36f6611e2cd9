//! Gallery item factory for creating test photos and videos.

use crate::factory::{helpers::next_id, tag::attach_tags};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct GalleryItemFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    caption: Option<String>,
    kind: String,
    featured: bool,
    position: i32,
    status: String,
    tags: Vec<&'static str>,
    media_url: String,
}

impl<'a> GalleryItemFactory<'a> {
    /// Creates a new GalleryItemFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Photo {id}"`, kind `"photo"`, draft, position 0, not featured
    /// - media_url: `"https://media.example.com/gallery-{id}.jpg"`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Photo {}", id),
            caption: None,
            kind: "photo".to_string(),
            featured: false,
            position: 0,
            status: "draft".to_string(),
            tags: Vec::new(),
            media_url: format!("https://media.example.com/gallery-{}.jpg", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the kind, `photo` or `video`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn tags(mut self, tags: &[&'static str]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub async fn build(self) -> Result<entity::gallery_item::Model, DbErr> {
        let now = Utc::now();
        let published_at = (self.status == "published").then_some(now);

        let item = entity::gallery_item::ActiveModel {
            title: ActiveValue::Set(self.title),
            title_am: ActiveValue::Set(None),
            title_or: ActiveValue::Set(None),
            caption: ActiveValue::Set(self.caption),
            caption_am: ActiveValue::Set(None),
            caption_or: ActiveValue::Set(None),
            kind: ActiveValue::Set(self.kind),
            media_url: ActiveValue::Set(self.media_url),
            thumbnail_url: ActiveValue::Set(None),
            featured: ActiveValue::Set(self.featured),
            position: ActiveValue::Set(self.position),
            status: ActiveValue::Set(self.status),
            author_id: ActiveValue::Set(self.author_id),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        attach_tags(self.db, "gallery", item.id, &self.tags).await?;

        Ok(item)
    }
}

/// Creates a draft photo by `author_id`.
pub async fn create_gallery_item(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::gallery_item::Model, DbErr> {
    GalleryItemFactory::new(db, author_id).build().await
}
