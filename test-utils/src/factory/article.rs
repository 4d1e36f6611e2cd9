//! Article factory for creating test articles and blog posts.

use crate::factory::{helpers::next_id, tag::attach_tags};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::article::ArticleFactory;
///
/// let article = ArticleFactory::new(&db, author.id)
///     .title("On Justice")
///     .status("published")
///     .featured(true)
///     .tags(&["law"])
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    slug: String,
    kind: String,
    title: String,
    content: String,
    status: String,
    featured: bool,
    is_premium: bool,
    view_count: i32,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    tags: Vec<&'static str>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"article-{id}"` where id is auto-incremented
    /// - kind: `"article"`
    /// - title: `"Article {id}"`
    /// - status: `"draft"`, not featured, not premium, no tags
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            slug: format!("article-{}", id),
            kind: "article".to_string(),
            title: format!("Article {}", id),
            content: format!("Body of article {}", id),
            status: "draft".to_string(),
            featured: false,
            is_premium: false,
            view_count: 0,
            published_at: None,
            created_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the kind, `article` or `blog`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the status; `published` also stamps `published_at`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        if self.status == "published" {
            self.published_at = Some(self.created_at);
        }
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    pub fn view_count(mut self, view_count: i32) -> Self {
        self.view_count = view_count;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn tags(mut self, tags: &[&'static str]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    /// Builds and inserts the article and its tags.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let article = entity::article::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            title_am: ActiveValue::Set(None),
            title_or: ActiveValue::Set(None),
            excerpt: ActiveValue::Set(None),
            excerpt_am: ActiveValue::Set(None),
            excerpt_or: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            content_am: ActiveValue::Set(None),
            content_or: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            featured: ActiveValue::Set(self.featured),
            is_premium: ActiveValue::Set(self.is_premium),
            author_id: ActiveValue::Set(self.author_id),
            view_count: ActiveValue::Set(self.view_count),
            like_count: ActiveValue::Set(0),
            published_at: ActiveValue::Set(self.published_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        attach_tags(self.db, "article", article.id, &self.tags).await?;

        Ok(article)
    }
}

/// Creates a draft article by `author_id` with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, author_id).build().await
}

/// Creates a published article by `author_id`.
pub async fn create_published_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, author_id)
        .status("published")
        .build()
        .await
}
