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
pub enum PublicationStatus {
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
pub enum PublicationKind {
    #[default]
    Book,
    Paper,
    Report,
    Speech,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDto {
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

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublicationDto {
    /// Derived from the title when omitted
    pub slug: Option<String>,
    pub title: String,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub description: Option<String>,
    pub description_am: Option<String>,
    pub description_or: Option<String>,
    #[serde(default)]
    pub kind: PublicationKind,
    pub publisher: Option<String>,
    pub published_year: Option<i32>,
    pub file_url: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default = "default_true")]
    pub is_free: bool,
    #[serde(default)]
    pub featured: bool,
    /// Defaults to `draft`
    pub status: Option<PublicationStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Partial update; omitted fields are left untouched and an empty string clears an
/// optional text field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicationDto {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub description: Option<String>,
    pub description_am: Option<String>,
    pub description_or: Option<String>,
    pub kind: Option<PublicationKind>,
    pub publisher: Option<String>,
    pub published_year: Option<i32>,
    pub file_url: Option<String>,
    pub cover_image: Option<String>,
    pub is_free: Option<bool>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Response of the download endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadDto {
    pub file_url: Option<String>,
    pub download_count: i32,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PublicationListQueryDto {
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Page size (default 12, max 100)
    pub limit: Option<u64>,
    /// One of `createdAt`, `publishedYear`, `title`, `downloadCount`
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub sort_order: Option<String>,
    /// Matches titles, description and publisher
    pub search: Option<String>,
    /// Ignored on the public listing, which only returns published items
    pub status: Option<String>,
    /// `book`, `paper`, `report` or `speech`
    pub kind: Option<String>,
    pub is_free: Option<bool>,
    pub featured: Option<bool>,
    pub author_id: Option<i32>,
    /// Comma separated; matches publications carrying any of the tags
    pub tags: Option<String>,
}
