use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};

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
pub enum PlanInterval {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub name_am: Option<String>,
    pub name_or: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub interval: PlanInterval,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanDto {
    /// Derived from the name when omitted
    pub slug: Option<String>,
    pub name: String,
    pub name_am: Option<String>,
    pub name_or: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    /// ISO 4217 code, defaults to `ETB`
    pub currency: Option<String>,
    #[serde(default)]
    pub interval: PlanInterval,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanDto {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub name_am: Option<String>,
    pub name_or: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub interval: Option<PlanInterval>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlanListQueryDto {
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Page size (default 20, max 100)
    pub limit: Option<u64>,
    /// One of `createdAt`, `priceCents`, `name`
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub sort_order: Option<String>,
    /// Matches the plan name in every language
    pub search: Option<String>,
    /// Ignored on the public listing, which only returns active plans
    pub is_active: Option<bool>,
    /// `monthly` or `yearly`
    pub interval: Option<String>,
}
