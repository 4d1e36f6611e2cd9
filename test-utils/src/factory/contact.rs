//! Contact submission factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ContactFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    status: String,
}

impl<'a> ContactFactory<'a> {
    /// Creates a new ContactFactory for a `new` submission from `"Visitor {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Visitor {}", id),
            email: format!("visitor{}@example.com", id),
            subject: Some(format!("Question {}", id)),
            message: format!("Message {}", id),
            status: "new".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the status, one of `new`, `read`, `replied` or `archived`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::contact_submission::Model, DbErr> {
        let now = Utc::now();
        entity::contact_submission::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            reply: ActiveValue::Set(None),
            replied_at: ActiveValue::Set(None),
            replied_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_contact(
    db: &DatabaseConnection,
) -> Result<entity::contact_submission::Model, DbErr> {
    ContactFactory::new(db).build().await
}
