use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountDto {
    pub status: String,
    pub count: u64,
}

/// Back office dashboard figures.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub articles_total: u64,
    pub articles_by_status: Vec<StatusCountDto>,
    pub publications_total: u64,
    pub publications_published: u64,
    pub new_contacts: u64,
    pub active_subscribers: u64,
    pub active_subscriptions: u64,
    pub orders_total: u64,
    pub orders_by_status: Vec<StatusCountDto>,
    /// Sum of paid, shipped and delivered orders
    pub revenue_cents: i64,
}
