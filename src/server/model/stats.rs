use crate::model::stats::{DashboardStatsDto, StatusCountDto};

/// Dashboard figures gathered from every resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub articles_by_status: Vec<(&'static str, u64)>,
    pub publications_total: u64,
    pub publications_published: u64,
    pub new_contacts: u64,
    pub active_subscribers: u64,
    pub active_subscriptions: u64,
    pub orders_by_status: Vec<(&'static str, u64)>,
    pub revenue_cents: i64,
}

fn status_counts(counts: Vec<(&'static str, u64)>) -> Vec<StatusCountDto> {
    counts
        .into_iter()
        .map(|(status, count)| StatusCountDto {
            status: status.to_string(),
            count,
        })
        .collect()
}

impl DashboardStats {
    pub fn articles_total(&self) -> u64 {
        self.articles_by_status.iter().map(|(_, c)| c).sum()
    }

    pub fn orders_total(&self) -> u64 {
        self.orders_by_status.iter().map(|(_, c)| c).sum()
    }

    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            articles_total: self.articles_total(),
            orders_total: self.orders_total(),
            articles_by_status: status_counts(self.articles_by_status),
            publications_total: self.publications_total,
            publications_published: self.publications_published,
            new_contacts: self.new_contacts,
            active_subscribers: self.active_subscribers,
            active_subscriptions: self.active_subscriptions,
            orders_by_status: status_counts(self.orders_by_status),
            revenue_cents: self.revenue_cents,
        }
    }
}
