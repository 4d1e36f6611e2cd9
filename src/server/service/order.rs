use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::order::OrderStatus,
    server::{
        data::order::OrderRepository,
        error::AppError,
        model::order::{CreateOrderParams, Order, OrderFilter, OrderSortBy},
        query::{lifecycle::ensure_transition, pager::Page, ListParams},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a pending order; the total was computed when the params were validated.
    pub async fn place(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Order {} placed: {} x '{}' for {} {}",
            order.id,
            order.quantity,
            order.item_title,
            order.total_cents,
            order.currency
        );

        Ok(order)
    }

    pub async fn list(
        &self,
        params: &ListParams<OrderFilter, OrderSortBy>,
    ) -> Result<Page<Order>, AppError> {
        Ok(OrderRepository::new(self.db).list(params).await?)
    }

    /// Gets a page of the orders placed by `user_id` while logged in.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        mut params: ListParams<OrderFilter, OrderSortBy>,
    ) -> Result<Page<Order>, AppError> {
        params.filter.user_id = Some(user_id);

        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order", id))
    }

    /// Moves an order through fulfilment; the first move to `paid` stamps `paid_at`.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::Conflict)` - Transition not allowed from the current status
    pub async fn set_status(&self, id: i32, status: OrderStatus) -> Result<Order, AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_transition("Order", existing.status, status)?;

        let paid_at = (status == OrderStatus::Paid && existing.paid_at.is_none()).then(Utc::now);

        Ok(OrderRepository::new(self.db)
            .set_status(id, status, paid_at)
            .await?)
    }
}
