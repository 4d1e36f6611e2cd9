//! Subscription factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    plan_id: i32,
    status: String,
}

impl<'a> SubscriptionFactory<'a> {
    /// Creates a new SubscriptionFactory for a pending subscription.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, plan_id: i32) -> Self {
        Self {
            db,
            user_id,
            plan_id,
            status: "pending".to_string(),
        }
    }

    /// Sets the status; `active` also stamps `started_at` and a 30 day `ends_at`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        let now = Utc::now();
        let (started_at, ends_at) = if self.status == "active" {
            (Some(now), Some(now + chrono::Duration::days(30)))
        } else {
            (None, None)
        };

        entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            plan_id: ActiveValue::Set(self.plan_id),
            status: ActiveValue::Set(self.status),
            started_at: ActiveValue::Set(started_at),
            ends_at: ActiveValue::Set(ends_at),
            cancelled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: i32,
    plan_id: i32,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db, user_id, plan_id).build().await
}
