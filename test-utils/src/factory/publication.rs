//! Publication factory for creating test books, papers, reports and speeches.

use crate::factory::{helpers::next_id, tag::attach_tags};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PublicationFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    slug: String,
    title: String,
    kind: String,
    publisher: Option<String>,
    published_year: Option<i32>,
    file_url: Option<String>,
    is_free: bool,
    status: String,
    tags: Vec<&'static str>,
}

impl<'a> PublicationFactory<'a> {
    /// Creates a new PublicationFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"publication-{id}"`, title: `"Publication {id}"`
    /// - kind: `"book"`, free, draft
    /// - file_url: `"https://files.example.com/publication-{id}.pdf"`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            slug: format!("publication-{}", id),
            title: format!("Publication {}", id),
            kind: "book".to_string(),
            publisher: None,
            published_year: None,
            file_url: Some(format!("https://files.example.com/publication-{}.pdf", id)),
            is_free: true,
            status: "draft".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the kind, one of `book`, `paper`, `report` or `speech`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn published_year(mut self, year: i32) -> Self {
        self.published_year = Some(year);
        self
    }

    pub fn free(mut self, is_free: bool) -> Self {
        self.is_free = is_free;
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

    pub async fn build(self) -> Result<entity::publication::Model, DbErr> {
        let now = Utc::now();
        let published_at = (self.status == "published").then_some(now);

        let publication = entity::publication::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            title_am: ActiveValue::Set(None),
            title_or: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            description_am: ActiveValue::Set(None),
            description_or: ActiveValue::Set(None),
            kind: ActiveValue::Set(self.kind),
            publisher: ActiveValue::Set(self.publisher),
            published_year: ActiveValue::Set(self.published_year),
            file_url: ActiveValue::Set(self.file_url),
            cover_image: ActiveValue::Set(None),
            is_free: ActiveValue::Set(self.is_free),
            featured: ActiveValue::Set(false),
            status: ActiveValue::Set(self.status),
            download_count: ActiveValue::Set(0),
            author_id: ActiveValue::Set(self.author_id),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        attach_tags(self.db, "publication", publication.id, &self.tags).await?;

        Ok(publication)
    }
}

/// Creates a free draft book by `author_id`.
pub async fn create_publication(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::publication::Model, DbErr> {
    PublicationFactory::new(db, author_id).build().await
}
