use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GalleryStatus {
    Draft,
    Published,
    Archived,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ToSchema,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GalleryKind {
    #[default]
    Photo,
    Video,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemDto {
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

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryItemDto {
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub caption: Option<String>,
    pub caption_am: Option<String>,
    pub caption_or: Option<String>,
    #[serde(default)]
    pub kind: GalleryKind,
    /// Location of the already uploaded photo or video
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub position: i32,
    /// Defaults to `draft`
    pub status: Option<GalleryStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update; omitted fields are left untouched and an empty string clears an
/// optional text field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryItemDto {
    pub title: Option<String>,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub caption: Option<String>,
    pub caption_am: Option<String>,
    pub caption_or: Option<String>,
    pub kind: Option<GalleryKind>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: Option<bool>,
    pub position: Option<i32>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GalleryListQueryDto {
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Page size (default 24, max 100)
    pub limit: Option<u64>,
    /// One of `createdAt`, `position`, `title`
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub sort_order: Option<String>,
    /// Matches titles and caption
    pub search: Option<String>,
    /// Ignored on the public listing, which only returns published items
    pub status: Option<String>,
    /// `photo` or `video`
    pub kind: Option<String>,
    pub featured: Option<bool>,
    pub author_id: Option<i32>,
    /// Comma separated; matches items carrying any of the tags
    pub tags: Option<String>,
}
