//! Subscription plan factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    price_cents: i64,
    interval: String,
    is_active: bool,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory for an active monthly plan priced 500 ETB.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("plan-{}", id),
            name: format!("Plan {}", id),
            price_cents: 50_000,
            interval: "monthly".to_string(),
            is_active: true,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the billing interval, `monthly` or `yearly`.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        let now = Utc::now();
        entity::plan::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            name_am: ActiveValue::Set(None),
            name_or: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            price_cents: ActiveValue::Set(self.price_cents),
            currency: ActiveValue::Set("ETB".to_string()),
            interval: ActiveValue::Set(self.interval),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_plan(db: &DatabaseConnection) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db).build().await
}
