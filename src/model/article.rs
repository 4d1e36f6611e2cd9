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
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
    Scheduled,
}

/// Long-form article or shorter blog post; both share one table.
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
pub enum ArticleKind {
    #[default]
    Article,
    Blog,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
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
    pub author_id: i32,
    pub view_count: i32,
    pub like_count: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleDto {
    /// Derived from the title when omitted
    pub slug: Option<String>,
    #[serde(default)]
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
    /// Defaults to `draft`
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update; omitted fields are left untouched and an empty string clears an
/// optional text field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleDto {
    pub slug: Option<String>,
    pub kind: Option<ArticleKind>,
    pub title: Option<String>,
    pub title_am: Option<String>,
    pub title_or: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_am: Option<String>,
    pub excerpt_or: Option<String>,
    pub content: Option<String>,
    pub content_am: Option<String>,
    pub content_or: Option<String>,
    pub cover_image: Option<String>,
    pub featured: Option<bool>,
    pub is_premium: Option<bool>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListQueryDto {
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Page size (default 10, max 100)
    pub limit: Option<u64>,
    /// One of `createdAt`, `updatedAt`, `publishedAt`, `title`, `viewCount`, `likeCount`
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub sort_order: Option<String>,
    /// Matches titles, excerpt and content
    pub search: Option<String>,
    /// Ignored on the public listing, which only returns published articles
    pub status: Option<String>,
    /// `article` or `blog`
    pub kind: Option<String>,
    pub featured: Option<bool>,
    pub is_premium: Option<bool>,
    pub author_id: Option<i32>,
    /// Comma separated; matches articles carrying any of the tags
    pub tags: Option<String>,
}
