//! Newsletter subscriber factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SubscriberFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: Option<String>,
    locale: String,
    status: String,
}

impl<'a> SubscriberFactory<'a> {
    /// Creates a new SubscriberFactory for a subscribed, English reader.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("reader{}@example.com", id),
            name: None,
            locale: "en".to_string(),
            status: "subscribed".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the locale, one of `en`, `am` or `or`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the status; `unsubscribed` also stamps `unsubscribed_at`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::newsletter_subscriber::Model, DbErr> {
        let now = Utc::now();
        let unsubscribed_at = (self.status == "unsubscribed").then_some(now);

        entity::newsletter_subscriber::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            locale: ActiveValue::Set(self.locale),
            status: ActiveValue::Set(self.status),
            source: ActiveValue::Set(None),
            subscribed_at: ActiveValue::Set(now),
            unsubscribed_at: ActiveValue::Set(unsubscribed_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_subscriber(
    db: &DatabaseConnection,
) -> Result<entity::newsletter_subscriber::Model, DbErr> {
    SubscriberFactory::new(db).build().await
}
