use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::resource::{patch, Resource, ResourceRepository},
    model::plan::{CreatePlanParams, Plan, PlanFilter, PlanSortBy, UpdatePlanParams},
    query::{filter::FilterBuilder, pager::Page, ListParams},
};

use entity::plan::Column;

pub struct PlanResource;

impl Resource for PlanResource {
    type Entity = entity::prelude::Plan;
    type Filter = PlanFilter;
    type SortBy = PlanSortBy;

    const LABEL: &'static str = "Plan";
    const DEFAULT_LIMIT: u64 = 20;

    fn id_column() -> Column {
        Column::Id
    }

    fn slug_column() -> Option<Column> {
        Some(Column::Slug)
    }

    fn sort_column(by: PlanSortBy) -> Column {
        match by {
            PlanSortBy::CreatedAt => Column::CreatedAt,
            PlanSortBy::PriceCents => Column::PriceCents,
            PlanSortBy::Name => Column::Name,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[Column::Name, Column::NameAm, Column::NameOr]
    }

    fn filter(filter: &PlanFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::IsActive, filter.is_active)
            .eq(Column::Interval, filter.interval.map(|i| i.to_string()))
            .search(Self::search_columns(), filter.search.as_deref())
    }
}

pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, PlanResource> {
        ResourceRepository::new(self.db)
    }

    pub async fn list(&self, params: &ListParams<PlanFilter, PlanSortBy>) -> Result<Page<Plan>, DbErr> {
        self.resource().list(params).await?.try_map(Plan::from_entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Plan>, DbErr> {
        self.resource()
            .find_by_id(id)
            .await?
            .map(Plan::from_entity)
            .transpose()
    }

    pub async fn create(&self, params: CreatePlanParams, slug: String) -> Result<Plan, DbErr> {
        let now = Utc::now();

        let model = entity::plan::ActiveModel {
            slug: ActiveValue::Set(slug),
            name: ActiveValue::Set(params.name),
            name_am: ActiveValue::Set(params.name_am),
            name_or: ActiveValue::Set(params.name_or),
            description: ActiveValue::Set(params.description),
            price_cents: ActiveValue::Set(params.price_cents),
            currency: ActiveValue::Set(params.currency),
            interval: ActiveValue::Set(params.interval.to_string()),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Plan::from_entity(model)
    }

    pub async fn update(&self, params: UpdatePlanParams) -> Result<Plan, DbErr> {
        let existing = entity::prelude::Plan::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Plan with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::plan::ActiveModel = existing.into();
        patch(&mut active_model.slug, params.slug);
        patch(&mut active_model.name, params.name);
        patch(&mut active_model.name_am, params.name_am);
        patch(&mut active_model.name_or, params.name_or);
        patch(&mut active_model.description, params.description);
        patch(&mut active_model.price_cents, params.price_cents);
        patch(&mut active_model.currency, params.currency);
        patch(&mut active_model.interval, params.interval.map(|i| i.to_string()));
        patch(&mut active_model.is_active, params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Plan::from_entity(model)
    }

    /// Checks whether any subscription, in any status, references the plan.
    pub async fn has_subscriptions(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::PlanId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().delete(id).await
    }
}
