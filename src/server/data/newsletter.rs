use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::{
    model::newsletter::SubscriberStatus,
    server::{
        data::resource::{patch, Resource, ResourceRepository},
        model::newsletter::{SubscribeParams, Subscriber, SubscriberFilter, SubscriberSortBy},
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::newsletter_subscriber::Column;

/// Rows per `INSERT` when importing subscribers.
pub const IMPORT_CHUNK_SIZE: usize = 100;

pub struct SubscriberResource;

impl Resource for SubscriberResource {
    type Entity = entity::prelude::NewsletterSubscriber;
    type Filter = SubscriberFilter;
    type SortBy = SubscriberSortBy;

    const LABEL: &'static str = "Subscriber";
    const DEFAULT_LIMIT: u64 = 20;

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(by: SubscriberSortBy) -> Column {
        match by {
            SubscriberSortBy::CreatedAt => Column::CreatedAt,
            SubscriberSortBy::Email => Column::Email,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[Column::Email, Column::Name]
    }

    fn filter(filter: &SubscriberFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .eq(Column::Locale, filter.locale.map(|l| l.to_string()))
            .search(Self::search_columns(), filter.search.as_deref())
    }
}

pub struct SubscriberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, SubscriberResource> {
        ResourceRepository::new(self.db)
    }

    fn active_model(params: SubscribeParams) -> entity::newsletter_subscriber::ActiveModel {
        let now = Utc::now();

        entity::newsletter_subscriber::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            locale: ActiveValue::Set(params.locale.to_string()),
            status: ActiveValue::Set(SubscriberStatus::Subscribed.to_string()),
            source: ActiveValue::Set(params.source),
            subscribed_at: ActiveValue::Set(now),
            unsubscribed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    pub async fn list(
        &self,
        params: &ListParams<SubscriberFilter, SubscriberSortBy>,
    ) -> Result<Page<Subscriber>, DbErr> {
        self.resource()
            .list(params)
            .await?
            .try_map(Subscriber::from_entity)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, DbErr> {
        entity::prelude::NewsletterSubscriber::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(Subscriber::from_entity)
            .transpose()
    }

    pub async fn create(&self, params: SubscribeParams) -> Result<Subscriber, DbErr> {
        let model = Self::active_model(params).insert(self.db).await?;

        Subscriber::from_entity(model)
    }

    /// Moves a subscriber between subscribed and unsubscribed.
    ///
    /// Resubscribing clears `unsubscribed_at`, restarts `subscribed_at` and takes the
    /// name and locale of the new signup when given.
    pub async fn set_status(
        &self,
        id: i32,
        status: SubscriberStatus,
        signup: Option<SubscribeParams>,
    ) -> Result<Subscriber, DbErr> {
        let existing = entity::prelude::NewsletterSubscriber::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Subscriber with id {} not found",
                id
            )))?;

        let now = Utc::now();
        let mut active_model: entity::newsletter_subscriber::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.to_string());
        match status {
            SubscriberStatus::Subscribed => {
                active_model.subscribed_at = ActiveValue::Set(now);
                active_model.unsubscribed_at = ActiveValue::Set(None);
            }
            SubscriberStatus::Unsubscribed => {
                active_model.unsubscribed_at = ActiveValue::Set(Some(now));
            }
        }
        if let Some(signup) = signup {
            patch(&mut active_model.name, signup.name.map(Some));
            active_model.locale = ActiveValue::Set(signup.locale.to_string());
        }
        active_model.updated_at = ActiveValue::Set(now);

        let model = active_model.update(self.db).await?;

        Subscriber::from_entity(model)
    }

    /// Gets which of `emails` already have a subscriber row.
    pub async fn existing_emails(&self, emails: &[String]) -> Result<HashSet<String>, DbErr> {
        let mut found = HashSet::new();

        for chunk in emails.chunks(IMPORT_CHUNK_SIZE) {
            let rows = entity::prelude::NewsletterSubscriber::find()
                .select_only()
                .column(Column::Email)
                .filter(Column::Email.is_in(chunk.iter().cloned()))
                .into_tuple::<String>()
                .all(self.db)
                .await?;
            found.extend(rows);
        }

        Ok(found)
    }

    /// Inserts new subscribers in chunks of [`IMPORT_CHUNK_SIZE`].
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn insert_batch(&self, signups: Vec<SubscribeParams>) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for chunk in signups.chunks(IMPORT_CHUNK_SIZE) {
            let rows = chunk.iter().cloned().map(Self::active_model);
            entity::prelude::NewsletterSubscriber::insert_many(rows)
                .exec(self.db)
                .await?;
            inserted += chunk.len() as u64;
        }

        Ok(inserted)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().delete(id).await
    }
}
