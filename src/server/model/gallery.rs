//! Gallery domain models and parameters.
//!
//! Gallery items point at photos or videos uploaded elsewhere; only their metadata lives
//! here. Items have no slug and are addressed by id.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::gallery::{
        CreateGalleryItemDto, GalleryItemDto, GalleryKind, GalleryListQueryDto, GalleryStatus,
        UpdateGalleryItemDto,
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
                clearable_text, optional_text, replacement_text, required_text, MAX_BODY_LEN,
                MAX_LINE_LEN,
            },
        },
    },
};

impl Lifecycle for GalleryStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        use GalleryStatus::*;

        match self {
            Draft => &[Published, Archived],
            Published => &[Archived, Draft],
            Archived => &[Draft],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: i32,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub caption: Option<String>,
    pub caption_am: Option<String>,
    pub caption_or: Option<String>,
    pub kind: GalleryKind,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub position: i32,
    pub status: GalleryStatus,
    pub tags: Vec<String>,
    pub author_id: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn from_entity(
        entity: entity::gallery_item::Model,
        tags: Vec<String>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            title_am: entity.title_am,
            title_or: entity.title_or,
            caption: entity.caption,
            caption_am: entity.caption_am,
            caption_or: entity.caption_or,
            kind: parse_stored("kind", &entity.kind)?,
            media_url: entity.media_url,
            thumbnail_url: entity.thumbnail_url,
            featured: entity.featured,
            position: entity.position,
            status: parse_stored("status", &entity.status)?,
            tags,
            author_id: entity.author_id,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> GalleryItemDto {
        GalleryItemDto {
            id: self.id,
            title: self.title,
            title_am: self.title_am,
            title_or: self.title_or,
            caption: self.caption,
            caption_am: self.caption_am,
            caption_or: self.caption_or,
            kind: self.kind,
            media_url: self.media_url,
            thumbnail_url: self.thumbnail_url,
            featured: self.featured,
            position: self.position,
            status: self.status,
            tags: self.tags,
            author_id: self.author_id,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GallerySortBy {
    #[default]
    CreatedAt,
    Position,
    Title,
}

impl SortKey for GallerySortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("position", Self::Position),
        ("title", Self::Title),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    pub status: Option<GalleryStatus>,
    pub kind: Option<GalleryKind>,
    pub featured: Option<bool>,
    pub author_id: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub search: Option<String>,
}

impl GalleryFilter {
    pub fn from_dto(dto: &GalleryListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            kind: parse_filter("kind", dto.kind.as_deref())?,
            featured: dto.featured,
            author_id: dto.author_id,
            tags: parse_tags(dto.tags.as_deref()),
            search: dto.search.clone(),
        })
    }
}

fn check_position(position: i32) -> Result<i32, AppError> {
    if position < 0 {
        return Err(AppError::BadRequest(
            "position must not be negative".to_string(),
        ));
    }
    Ok(position)
}

#[derive(Debug, Clone)]
pub struct CreateGalleryItemParams {
    pub author_id: i32,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub caption: Option<String>,
    pub caption_am: Option<String>,
    pub caption_or: Option<String>,
    pub kind: GalleryKind,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub position: i32,
    pub status: GalleryStatus,
    pub tags: Vec<String>,
}

impl CreateGalleryItemParams {
    /// Validates a create request on behalf of `author_id`.
    ///
    /// # Returns
    /// - `Ok(CreateGalleryItemParams)` - Trimmed and validated input
    /// - `Err(AppError::BadRequest)` - Missing title or media URL, negative position or
    ///   overlong field
    pub fn from_dto(author_id: i32, dto: CreateGalleryItemDto) -> Result<Self, AppError> {
        Ok(Self {
            author_id,
            title: required_text("title", &dto.title, MAX_LINE_LEN)?,
            title_am: optional_text("titleAm", dto.title_am, MAX_LINE_LEN)?,
            title_or: optional_text("titleOr", dto.title_or, MAX_LINE_LEN)?,
            caption: optional_text("caption", dto.caption, MAX_BODY_LEN)?,
            caption_am: optional_text("captionAm", dto.caption_am, MAX_BODY_LEN)?,
            caption_or: optional_text("captionOr", dto.caption_or, MAX_BODY_LEN)?,
            kind: dto.kind,
            media_url: required_text("mediaUrl", &dto.media_url, MAX_LINE_LEN)?,
            thumbnail_url: optional_text("thumbnailUrl", dto.thumbnail_url, MAX_LINE_LEN)?,
            featured: dto.featured,
            position: check_position(dto.position)?,
            status: dto.status.unwrap_or(GalleryStatus::Draft),
            tags: normalize_tags(dto.tags.iter().map(String::as_str)),
        })
    }
}

/// Validated partial update of a gallery item.
///
/// `None` leaves a field untouched. For nullable columns, `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGalleryItemParams {
    pub id: i32,
    pub title: Option<String>,
    pub title_am: Option<Option<String>>,
    pub title_or: Option<Option<String>>,
    pub caption: Option<Option<String>>,
    pub caption_am: Option<Option<String>>,
    pub caption_or: Option<Option<String>>,
    pub kind: Option<GalleryKind>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub position: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl UpdateGalleryItemParams {
    pub fn from_dto(id: i32, dto: UpdateGalleryItemDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: replacement_text("title", dto.title, MAX_LINE_LEN)?,
            title_am: clearable_text("titleAm", dto.title_am, MAX_LINE_LEN)?,
            title_or: clearable_text("titleOr", dto.title_or, MAX_LINE_LEN)?,
            caption: clearable_text("caption", dto.caption, MAX_BODY_LEN)?,
            caption_am: clearable_text("captionAm", dto.caption_am, MAX_BODY_LEN)?,
            caption_or: clearable_text("captionOr", dto.caption_or, MAX_BODY_LEN)?,
            kind: dto.kind,
            media_url: replacement_text("mediaUrl", dto.media_url, MAX_LINE_LEN)?,
            thumbnail_url: clearable_text("thumbnailUrl", dto.thumbnail_url, MAX_LINE_LEN)?,
            featured: dto.featured,
            position: dto.position.map(check_position).transpose()?,
            tags: dto
                .tags
                .map(|tags| normalize_tags(tags.iter().map(String::as_str))),
        })
    }
}
