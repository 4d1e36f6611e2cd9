use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::contact::ContactStatus,
    server::{
        data::resource::{Resource, ResourceRepository},
        model::contact::{ContactFilter, ContactSortBy, ContactSubmission, CreateContactParams},
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::contact_submission::Column;

pub struct ContactResource;

impl Resource for ContactResource {
    type Entity = entity::prelude::ContactSubmission;
    type Filter = ContactFilter;
    type SortBy = ContactSortBy;

    const LABEL: &'static str = "Contact submission";
    const DEFAULT_LIMIT: u64 = 20;

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(by: ContactSortBy) -> Column {
        match by {
            ContactSortBy::CreatedAt => Column::CreatedAt,
            ContactSortBy::Name => Column::Name,
            ContactSortBy::Status => Column::Status,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[Column::Name, Column::Email, Column::Subject, Column::Message]
    }

    fn filter(filter: &ContactFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .search(Self::search_columns(), filter.search.as_deref())
    }
}

/// Reply written by a staff member.
pub struct ContactReply {
    pub reply: String,
    pub replied_by: i32,
    pub replied_at: DateTime<Utc>,
}

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, ContactResource> {
        ResourceRepository::new(self.db)
    }

    async fn get_model(&self, id: i32) -> Result<entity::contact_submission::Model, DbErr> {
        entity::prelude::ContactSubmission::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Contact submission with id {} not found",
                id
            )))
    }

    pub async fn list(
        &self,
        params: &ListParams<ContactFilter, ContactSortBy>,
    ) -> Result<Page<ContactSubmission>, DbErr> {
        self.resource()
            .list(params)
            .await?
            .try_map(ContactSubmission::from_entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ContactSubmission>, DbErr> {
        self.resource()
            .find_by_id(id)
            .await?
            .map(ContactSubmission::from_entity)
            .transpose()
    }

    pub async fn create(&self, params: CreateContactParams) -> Result<ContactSubmission, DbErr> {
        let now = Utc::now();

        let model = entity::contact_submission::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(ContactStatus::New.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ContactSubmission::from_entity(model)
    }

    /// Writes a new status and, when given, the reply that caused it.
    pub async fn set_status(
        &self,
        id: i32,
        status: ContactStatus,
        reply: Option<ContactReply>,
    ) -> Result<ContactSubmission, DbErr> {
        let existing = self.get_model(id).await?;

        let mut active_model: entity::contact_submission::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.to_string());
        if let Some(reply) = reply {
            active_model.reply = ActiveValue::Set(Some(reply.reply));
            active_model.replied_by = ActiveValue::Set(Some(reply.replied_by));
            active_model.replied_at = ActiveValue::Set(Some(reply.replied_at));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        ContactSubmission::from_entity(model)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().delete(id).await
    }
}
