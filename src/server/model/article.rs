//! Article domain models and parameters.
//!
//! Articles and blog posts share one model distinguished by `kind`. Every text field
//! exists in English with optional Amharic (`_am`) and Afaan Oromo (`_or`) variants.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::article::{
        ArticleDto, ArticleKind, ArticleListQueryDto, ArticleStatus, CreateArticleDto,
        UpdateArticleDto,
    },
    server::{
        error::AppError,
        query::{
            filter::{normalize_tags, parse_tags},
            lifecycle::Lifecycle,
            sort::SortKey,
        },
        util::{
            parse::{parse_filter, parse_stored},
            validate::{
                clearable_text, optional_text, replacement_text, required_text, slug,
                MAX_BODY_LEN, MAX_LINE_LEN,
            },
        },
    },
};

impl Lifecycle for ArticleStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        use ArticleStatus::*;

        match self {
            Draft => &[Published, Scheduled, Archived],
            Scheduled => &[Published, Draft, Archived],
            Published => &[Archived, Draft],
            Archived => &[Draft],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub slug: String,
    pub kind: ArticleKind,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_am: Option<String>,
    pub excerpt_or: Option<String>,
    pub content: String,
    pub content_am: Option<String>,
    pub content_or: Option<String>,
    pub cover_image: Option<String>,
    pub status: ArticleStatus,
    pub featured: bool,
    pub is_premium: bool,
    pub tags: Vec<String>,
    /// Set on creation and never changed afterwards.
    pub author_id: i32,
    pub view_count: i32,
    pub like_count: i32,
    /// First time the article was published; kept when it is unpublished again.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts an entity model and its tags to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Article)` - The converted article
    /// - `Err(DbErr::Custom)` - The stored kind or status is unknown
    pub fn from_entity(entity: entity::article::Model, tags: Vec<String>) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            slug: entity.slug,
            kind: parse_stored("kind", &entity.kind)?,
            title: entity.title,
            title_am: entity.title_am,
            title_or: entity.title_or,
            excerpt: entity.excerpt,
            excerpt_am: entity.excerpt_am,
            excerpt_or: entity.excerpt_or,
            content: entity.content,
            content_am: entity.content_am,
            content_or: entity.content_or,
            cover_image: entity.cover_image,
            status: parse_stored("status", &entity.status)?,
            featured: entity.featured,
            is_premium: entity.is_premium,
            tags,
            author_id: entity.author_id,
            view_count: entity.view_count,
            like_count: entity.like_count,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            slug: self.slug,
            kind: self.kind,
            title: self.title,
            title_am: self.title_am,
            title_or: self.title_or,
            excerpt: self.excerpt,
            excerpt_am: self.excerpt_am,
            excerpt_or: self.excerpt_or,
            content: self.content,
            content_am: self.content_am,
            content_or: self.content_or,
            cover_image: self.cover_image,
            status: self.status,
            featured: self.featured,
            is_premium: self.is_premium,
            tags: self.tags,
            author_id: self.author_id,
            view_count: self.view_count,
            like_count: self.like_count,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortBy {
    #[default]
    CreatedAt,
    UpdatedAt,
    PublishedAt,
    Title,
    ViewCount,
    LikeCount,
}

impl SortKey for ArticleSortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("updatedAt", Self::UpdatedAt),
        ("publishedAt", Self::PublishedAt),
        ("title", Self::Title),
        ("viewCount", Self::ViewCount),
        ("likeCount", Self::LikeCount),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub kind: Option<ArticleKind>,
    pub featured: Option<bool>,
    pub is_premium: Option<bool>,
    pub author_id: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub search: Option<String>,
}

impl ArticleFilter {
    /// Converts list query parameters into a typed filter.
    ///
    /// # Returns
    /// - `Ok(ArticleFilter)` - Parsed filter
    /// - `Err(AppError::BadRequest)` - Unknown status or kind value
    pub fn from_dto(dto: &ArticleListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            kind: parse_filter("kind", dto.kind.as_deref())?,
            featured: dto.featured,
            is_premium: dto.is_premium,
            author_id: dto.author_id,
            tags: parse_tags(dto.tags.as_deref()),
            search: dto.search.clone(),
        })
    }
}

/// Validated input for a new article.
#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub author_id: i32,
    /// Explicit slug; generated from the title when `None`.
    pub slug: Option<String>,
    pub kind: ArticleKind,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_am: Option<String>,
    pub excerpt_or: Option<String>,
    pub content: String,
    pub content_am: Option<String>,
    pub content_or: Option<String>,
    pub cover_image: Option<String>,
    pub status: ArticleStatus,
    pub featured: bool,
    pub is_premium: bool,
    pub tags: Vec<String>,
}

impl CreateArticleParams {
    /// Validates a create request on behalf of `author_id`.
    ///
    /// # Returns
    /// - `Ok(CreateArticleParams)` - Trimmed and validated input
    /// - `Err(AppError::BadRequest)` - Missing title/content, overlong field or malformed slug
    pub fn from_dto(author_id: i32, dto: CreateArticleDto) -> Result<Self, AppError> {
        Ok(Self {
            author_id,
            slug: dto.slug.as_deref().map(slug).transpose()?,
            kind: dto.kind,
            title: required_text("title", &dto.title, MAX_LINE_LEN)?,
            title_am: optional_text("titleAm", dto.title_am, MAX_LINE_LEN)?,
            title_or: optional_text("titleOr", dto.title_or, MAX_LINE_LEN)?,
            excerpt: optional_text("excerpt", dto.excerpt, MAX_BODY_LEN)?,
            excerpt_am: optional_text("excerptAm", dto.excerpt_am, MAX_BODY_LEN)?,
            excerpt_or: optional_text("excerptOr", dto.excerpt_or, MAX_BODY_LEN)?,
            content: required_text("content", &dto.content, MAX_BODY_LEN)?,
            content_am: optional_text("contentAm", dto.content_am, MAX_BODY_LEN)?,
            content_or: optional_text("contentOr", dto.content_or, MAX_BODY_LEN)?,
            cover_image: optional_text("coverImage", dto.cover_image, MAX_LINE_LEN)?,
            status: dto.status.unwrap_or(ArticleStatus::Draft),
            featured: dto.featured,
            is_premium: dto.is_premium,
            tags: normalize_tags(dto.tags.iter().map(String::as_str)),
        })
    }
}

/// Validated partial update of an article.
///
/// `None` leaves a field untouched. For nullable text, `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParams {
    pub id: i32,
    pub slug: Option<String>,
    pub kind: Option<ArticleKind>,
    pub title: Option<String>,
    pub title_am: Option<Option<String>>,
    pub title_or: Option<Option<String>>,
    pub excerpt: Option<Option<String>>,
    pub excerpt_am: Option<Option<String>>,
    pub excerpt_or: Option<Option<String>>,
    pub content: Option<String>,
    pub content_am: Option<Option<String>>,
    pub content_or: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub featured: Option<bool>,
    pub is_premium: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl UpdateArticleParams {
    /// Validates an update request for article `id`.
    ///
    /// # Returns
    /// - `Ok(UpdateArticleParams)` - Trimmed and validated changes
    /// - `Err(AppError::BadRequest)` - Blank title/content, overlong field or malformed slug
    pub fn from_dto(id: i32, dto: UpdateArticleDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            slug: dto.slug.as_deref().map(slug).transpose()?,
            kind: dto.kind,
            title: replacement_text("title", dto.title, MAX_LINE_LEN)?,
            title_am: clearable_text("titleAm", dto.title_am, MAX_LINE_LEN)?,
            title_or: clearable_text("titleOr", dto.title_or, MAX_LINE_LEN)?,
            excerpt: clearable_text("excerpt", dto.excerpt, MAX_BODY_LEN)?,
            excerpt_am: clearable_text("excerptAm", dto.excerpt_am, MAX_BODY_LEN)?,
            excerpt_or: clearable_text("excerptOr", dto.excerpt_or, MAX_BODY_LEN)?,
            content: replacement_text("content", dto.content, MAX_BODY_LEN)?,
            content_am: clearable_text("contentAm", dto.content_am, MAX_BODY_LEN)?,
            content_or: clearable_text("contentOr", dto.content_or, MAX_BODY_LEN)?,
            cover_image: clearable_text("coverImage", dto.cover_image, MAX_LINE_LEN)?,
            featured: dto.featured,
            is_premium: dto.is_premium,
            tags: dto
                .tags
                .map(|tags| normalize_tags(tags.iter().map(String::as_str))),
        })
    }
}
