use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::order::OrderStatus,
    server::{
        data::resource::{patch, Resource, ResourceRepository},
        model::order::{CreateOrderParams, Order, OrderFilter, OrderSortBy},
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::book_order::Column;

pub struct OrderResource;

impl Resource for OrderResource {
    type Entity = entity::prelude::BookOrder;
    type Filter = OrderFilter;
    type SortBy = OrderSortBy;

    const LABEL: &'static str = "Order";
    const DEFAULT_LIMIT: u64 = 20;

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(by: OrderSortBy) -> Column {
        match by {
            OrderSortBy::CreatedAt => Column::CreatedAt,
            OrderSortBy::TotalCents => Column::TotalCents,
            OrderSortBy::Status => Column::Status,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[Column::CustomerName, Column::CustomerEmail, Column::ItemTitle]
    }

    fn filter(filter: &OrderFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .eq(Column::UserId, filter.user_id)
            .search(Self::search_columns(), filter.search.as_deref())
    }
}

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, OrderResource> {
        ResourceRepository::new(self.db)
    }

    pub async fn list(
        &self,
        params: &ListParams<OrderFilter, OrderSortBy>,
    ) -> Result<Page<Order>, DbErr> {
        self.resource().list(params).await?.try_map(Order::from_entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        self.resource()
            .find_by_id(id)
            .await?
            .map(Order::from_entity)
            .transpose()
    }

    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let now = Utc::now();

        let model = entity::book_order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            customer_name: ActiveValue::Set(params.customer_name),
            customer_email: ActiveValue::Set(params.customer_email),
            item_title: ActiveValue::Set(params.item_title),
            quantity: ActiveValue::Set(params.quantity),
            unit_price_cents: ActiveValue::Set(params.unit_price_cents),
            total_cents: ActiveValue::Set(params.total_cents),
            currency: ActiveValue::Set(params.currency),
            shipping_address: ActiveValue::Set(params.shipping_address),
            status: ActiveValue::Set(OrderStatus::Pending.to_string()),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Order::from_entity(model)
    }

    /// Writes a new status, stamping `paid_at` when given.
    pub async fn set_status(
        &self,
        id: i32,
        status: OrderStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<Order, DbErr> {
        let existing = entity::prelude::BookOrder::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Order with id {} not found", id)))?;

        let mut active_model: entity::book_order::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.to_string());
        patch(&mut active_model.paid_at, paid_at.map(Some));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Order::from_entity(model)
    }
}
