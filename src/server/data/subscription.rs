use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::subscription::SubscriptionStatus,
    server::{
        data::resource::{patch, Resource, ResourceRepository},
        model::subscription::{
            Subscription, SubscriptionFilter, SubscriptionSortBy, SubscriptionStatusChange,
        },
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::subscription::Column;

pub struct SubscriptionResource;

impl Resource for SubscriptionResource {
    type Entity = entity::prelude::Subscription;
    type Filter = SubscriptionFilter;
    type SortBy = SubscriptionSortBy;

    const LABEL: &'static str = "Subscription";
    const DEFAULT_LIMIT: u64 = 20;

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(by: SubscriptionSortBy) -> Column {
        match by {
            SubscriptionSortBy::CreatedAt => Column::CreatedAt,
            SubscriptionSortBy::EndsAt => Column::EndsAt,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[]
    }

    fn filter(filter: &SubscriptionFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .eq(Column::PlanId, filter.plan_id)
            .eq(Column::UserId, filter.user_id)
    }
}

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, SubscriptionResource> {
        ResourceRepository::new(self.db)
    }

    pub async fn list(
        &self,
        params: &ListParams<SubscriptionFilter, SubscriptionSortBy>,
    ) -> Result<Page<Subscription>, DbErr> {
        self.resource()
            .list(params)
            .await?
            .try_map(Subscription::from_entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Subscription>, DbErr> {
        self.resource()
            .find_by_id(id)
            .await?
            .map(Subscription::from_entity)
            .transpose()
    }

    /// Finds the user's pending or active subscription, if any.
    pub async fn find_open_for_user(&self, user_id: i32) -> Result<Option<Subscription>, DbErr> {
        let open = [SubscriptionStatus::Pending, SubscriptionStatus::Active]
            .map(|status| status.to_string());

        entity::prelude::Subscription::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.is_in(open))
            .one(self.db)
            .await?
            .map(Subscription::from_entity)
            .transpose()
    }

    /// Inserts a pending subscription.
    pub async fn create(&self, user_id: i32, plan_id: i32) -> Result<Subscription, DbErr> {
        let now = Utc::now();

        let model = entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            plan_id: ActiveValue::Set(plan_id),
            status: ActiveValue::Set(SubscriptionStatus::Pending.to_string()),
            started_at: ActiveValue::Set(None),
            ends_at: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Subscription::from_entity(model)
    }

    pub async fn update_status(
        &self,
        id: i32,
        change: SubscriptionStatusChange,
    ) -> Result<Subscription, DbErr> {
        let existing = entity::prelude::Subscription::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Subscription with id {} not found",
                id
            )))?;

        let mut active_model: entity::subscription::ActiveModel = existing.into();
        patch(&mut active_model.status, change.status.map(|s| s.to_string()));
        patch(&mut active_model.started_at, change.started_at.map(Some));
        patch(&mut active_model.ends_at, change.ends_at.map(Some));
        patch(&mut active_model.cancelled_at, change.cancelled_at.map(Some));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Subscription::from_entity(model)
    }
}
