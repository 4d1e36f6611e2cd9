//! Member subscription domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::subscription::{SubscriptionDto, SubscriptionListQueryDto, SubscriptionStatus},
    server::{
        error::AppError,
        query::{lifecycle::Lifecycle, sort::SortKey},
        util::parse::{parse_filter, parse_stored},
    },
};

impl Lifecycle for SubscriptionStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        use SubscriptionStatus::*;

        match self {
            Pending => &[Active, Cancelled],
            Active => &[Cancelled, Expired],
            Cancelled | Expired => &[],
        }
    }
}

impl SubscriptionStatus {
    /// Pending and active subscriptions count against the one-per-member limit.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: i32,
    pub user_id: i32,
    pub plan_id: i32,
    pub status: SubscriptionStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn from_entity(entity: entity::subscription::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            plan_id: entity.plan_id,
            status: parse_stored("status", &entity.status)?,
            started_at: entity.started_at,
            ends_at: entity.ends_at,
            cancelled_at: entity.cancelled_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.id,
            user_id: self.user_id,
            plan_id: self.plan_id,
            status: self.status,
            started_at: self.started_at,
            ends_at: self.ends_at,
            cancelled_at: self.cancelled_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionSortBy {
    #[default]
    CreatedAt,
    EndsAt,
}

impl SortKey for SubscriptionSortBy {
    const KEYS: &'static [(&'static str, Self)] =
        &[("createdAt", Self::CreatedAt), ("endsAt", Self::EndsAt)];
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionFilter {
    pub status: Option<SubscriptionStatus>,
    pub plan_id: Option<i32>,
    pub user_id: Option<i32>,
}

impl SubscriptionFilter {
    pub fn from_dto(dto: &SubscriptionListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            plan_id: dto.plan_id,
            user_id: dto.user_id,
        })
    }
}

/// Timestamps written alongside a status change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionStatusChange {
    pub status: Option<SubscriptionStatus>,
    pub started_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}
