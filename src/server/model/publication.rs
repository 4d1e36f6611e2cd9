//! Publication domain models and parameters.
//!
//! Publications are downloadable works (books, papers, reports, speeches). Non-free
//! publications can only be downloaded by signed-in members.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::publication::{
        CreatePublicationDto, PublicationDto, PublicationKind, PublicationListQueryDto,
        PublicationStatus, UpdatePublicationDto,
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

impl Lifecycle for PublicationStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        use PublicationStatus::*;

        match self {
            Draft => &[Published, Archived],
            Published => &[Archived, Draft],
            Archived => &[Draft],
        }
    }
}

/// Earliest and latest accepted publication year.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub description: Option<String>,
    pub description_am: Option<String>,
    pub description_or: Option<String>,
    pub kind: PublicationKind,
    pub publisher: Option<String>,
    pub published_year: Option<i32>,
    pub file_url: Option<String>,
    pub cover_image: Option<String>,
    pub is_free: bool,
    pub featured: bool,
    pub status: PublicationStatus,
    pub download_count: i32,
    pub tags: Vec<String>,
    pub author_id: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Publication {
    /// Converts an entity model and its tags to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Publication)` - The converted publication
    /// - `Err(DbErr::Custom)` - The stored kind or status is unknown
    pub fn from_entity(
        entity: entity::publication::Model,
        tags: Vec<String>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            title_am: entity.title_am,
            title_or: entity.title_or,
            description: entity.description,
            description_am: entity.description_am,
            description_or: entity.description_or,
            kind: parse_stored("kind", &entity.kind)?,
            publisher: entity.publisher,
            published_year: entity.published_year,
            file_url: entity.file_url,
            cover_image: entity.cover_image,
            is_free: entity.is_free,
            featured: entity.featured,
            status: parse_stored("status", &entity.status)?,
            download_count: entity.download_count,
            tags,
            author_id: entity.author_id,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PublicationDto {
        PublicationDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            title_am: self.title_am,
            title_or: self.title_or,
            description: self.description,
            description_am: self.description_am,
            description_or: self.description_or,
            kind: self.kind,
            publisher: self.publisher,
            published_year: self.published_year,
            file_url: self.file_url,
            cover_image: self.cover_image,
            is_free: self.is_free,
            featured: self.featured,
            status: self.status,
            download_count: self.download_count,
            tags: self.tags,
            author_id: self.author_id,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicationSortBy {
    #[default]
    CreatedAt,
    PublishedYear,
    Title,
    DownloadCount,
}

impl SortKey for PublicationSortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("publishedYear", Self::PublishedYear),
        ("title", Self::Title),
        ("downloadCount", Self::DownloadCount),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct PublicationFilter {
    pub status: Option<PublicationStatus>,
    pub kind: Option<PublicationKind>,
    pub is_free: Option<bool>,
    pub featured: Option<bool>,
    pub author_id: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub search: Option<String>,
}

impl PublicationFilter {
    /// Converts list query parameters into a typed filter.
    ///
    /// # Returns
    /// - `Ok(PublicationFilter)` - Parsed filter
    /// - `Err(AppError::BadRequest)` - Unknown status or kind value
    pub fn from_dto(dto: &PublicationListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            kind: parse_filter("kind", dto.kind.as_deref())?,
            is_free: dto.is_free,
            featured: dto.featured,
            author_id: dto.author_id,
            tags: parse_tags(dto.tags.as_deref()),
            search: dto.search.clone(),
        })
    }
}

fn check_year(year: Option<i32>) -> Result<Option<i32>, AppError> {
    match year {
        Some(y) if !YEAR_RANGE.contains(&y) => Err(AppError::BadRequest(format!(
            "publishedYear must be between {} and {}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        ))),
        _ => Ok(year),
    }
}

#[derive(Debug, Clone)]
pub struct CreatePublicationParams {
    pub author_id: i32,
    pub slug: Option<String>,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub description: Option<String>,
    pub description_am: Option<String>,
    pub description_or: Option<String>,
    pub kind: PublicationKind,
    pub publisher: Option<String>,
    pub published_year: Option<i32>,
    pub file_url: Option<String>,
    pub cover_image: Option<String>,
    pub is_free: bool,
    pub featured: bool,
    pub status: PublicationStatus,
    pub tags: Vec<String>,
}

impl CreatePublicationParams {
    /// Validates a create request on behalf of `author_id`.
    ///
    /// # Returns
    /// - `Ok(CreatePublicationParams)` - Trimmed and validated input
    /// - `Err(AppError::BadRequest)` - Missing title, bad year, overlong field or malformed slug
    pub fn from_dto(author_id: i32, dto: CreatePublicationDto) -> Result<Self, AppError> {
        Ok(Self {
            author_id,
            slug: dto.slug.as_deref().map(slug).transpose()?,
            title: required_text("title", &dto.title, MAX_LINE_LEN)?,
            title_am: optional_text("titleAm", dto.title_am, MAX_LINE_LEN)?,
            title_or: optional_text("titleOr", dto.title_or, MAX_LINE_LEN)?,
            description: optional_text("description", dto.description, MAX_BODY_LEN)?,
            description_am: optional_text("descriptionAm", dto.description_am, MAX_BODY_LEN)?,
            description_or: optional_text("descriptionOr", dto.description_or, MAX_BODY_LEN)?,
            kind: dto.kind,
            publisher: optional_text("publisher", dto.publisher, MAX_LINE_LEN)?,
            published_year: check_year(dto.published_year)?,
            file_url: optional_text("fileUrl", dto.file_url, MAX_LINE_LEN)?,
            cover_image: optional_text("coverImage", dto.cover_image, MAX_LINE_LEN)?,
            is_free: dto.is_free,
            featured: dto.featured,
            status: dto.status.unwrap_or(PublicationStatus::Draft),
            tags: normalize_tags(dto.tags.iter().map(String::as_str)),
        })
    }
}

/// Validated partial update of a publication.
///
/// `None` leaves a field untouched. For nullable columns, `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePublicationParams {
    pub id: i32,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub title_am: Option<Option<String>>,
    pub title_or: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub description_am: Option<Option<String>>,
    pub description_or: Option<Option<String>>,
    pub kind: Option<PublicationKind>,
    pub publisher: Option<Option<String>>,
    pub published_year: Option<i32>,
    pub file_url: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub is_free: Option<bool>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl UpdatePublicationParams {
    pub fn from_dto(id: i32, dto: UpdatePublicationDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            slug: dto.slug.as_deref().map(slug).transpose()?,
            title: replacement_text("title", dto.title, MAX_LINE_LEN)?,
            title_am: clearable_text("titleAm", dto.title_am, MAX_LINE_LEN)?,
            title_or: clearable_text("titleOr", dto.title_or, MAX_LINE_LEN)?,
            description: clearable_text("description", dto.description, MAX_BODY_LEN)?,
            description_am: clearable_text("descriptionAm", dto.description_am, MAX_BODY_LEN)?,
            description_or: clearable_text("descriptionOr", dto.description_or, MAX_BODY_LEN)?,
            kind: dto.kind,
            publisher: clearable_text("publisher", dto.publisher, MAX_LINE_LEN)?,
            published_year: check_year(dto.published_year)?,
            file_url: clearable_text("fileUrl", dto.file_url, MAX_LINE_LEN)?,
            cover_image: clearable_text("coverImage", dto.cover_image, MAX_LINE_LEN)?,
            is_free: dto.is_free,
            featured: dto.featured,
            tags: dto
                .tags
                .map(|tags| normalize_tags(tags.iter().map(String::as_str))),
        })
    }
}
