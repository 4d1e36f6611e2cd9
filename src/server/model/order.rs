//! Book order domain models and parameters.
//!
//! Orders record a checkout; payment collection itself happens outside this service and
//! is reflected here by moving the order to `paid`.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderListQueryDto, OrderStatus},
    server::{
        error::{internal::InternalError, AppError},
        model::plan::DEFAULT_CURRENCY,
        query::{lifecycle::Lifecycle, sort::SortKey},
        util::{
            parse::{parse_filter, parse_stored},
            validate::{currency, email, required_text, MAX_LINE_LEN},
        },
    },
};

/// Largest quantity accepted in one order.
pub const MAX_QUANTITY: i32 = 100;

impl Lifecycle for OrderStatus {
    fn name(self) -> &'static str {
        self.into()
    }

    fn next_states(self) -> &'static [Self] {
        use OrderStatus::*;

        match self {
            Pending => &[Paid, Cancelled],
            Paid => &[Shipped, Cancelled, Refunded],
            Shipped => &[Delivered],
            Delivered => &[Refunded],
            Cancelled | Refunded => &[],
        }
    }
}

impl OrderStatus {
    /// Statuses whose totals count as revenue.
    pub const REVENUE: [OrderStatus; 3] = [Self::Paid, Self::Shipped, Self::Delivered];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    /// `None` for guest checkout.
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub item_title: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub currency: String,
    pub shipping_address: String,
    pub status: OrderStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(entity: entity::book_order::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            item_title: entity.item_title,
            quantity: entity.quantity,
            unit_price_cents: entity.unit_price_cents,
            total_cents: entity.total_cents,
            currency: entity.currency,
            shipping_address: entity.shipping_address,
            status: parse_stored("status", &entity.status)?,
            paid_at: entity.paid_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            item_title: self.item_title,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
            total_cents: self.total_cents,
            currency: self.currency,
            shipping_address: self.shipping_address,
            status: self.status,
            paid_at: self.paid_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSortBy {
    #[default]
    CreatedAt,
    TotalCents,
    Status,
}

impl SortKey for OrderSortBy {
    const KEYS: &'static [(&'static str, Self)] = &[
        ("createdAt", Self::CreatedAt),
        ("totalCents", Self::TotalCents),
        ("total", Self::TotalCents),
        ("status", Self::Status),
    ];
}

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub user_id: Option<i32>,
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn from_dto(dto: &OrderListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_filter("status", dto.status.as_deref())?,
            user_id: dto.user_id,
            search: dto.search.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub item_title: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub currency: String,
    pub shipping_address: String,
}

impl CreateOrderParams {
    /// Validates a checkout request and computes its total.
    ///
    /// # Arguments
    /// - `user_id` - Signed-in buyer, or `None` for guest checkout
    /// - `dto` - Checkout request
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - Validated order with `total_cents` filled in
    /// - `Err(AppError::BadRequest)` - Quantity outside 1..=100, non-positive price or bad text
    /// - `Err(AppError::InternalErr(AmountOverflow))` - Total does not fit in `i64` cents
    pub fn from_dto(user_id: Option<i32>, dto: CreateOrderDto) -> Result<Self, AppError> {
        if !(1..=MAX_QUANTITY).contains(&dto.quantity) {
            return Err(AppError::BadRequest(format!(
                "quantity must be between 1 and {}",
                MAX_QUANTITY
            )));
        }
        if dto.unit_price_cents <= 0 {
            return Err(AppError::BadRequest(
                "unitPriceCents must be positive".to_string(),
            ));
        }

        let total_cents = order_total(dto.quantity, dto.unit_price_cents)?;

        Ok(Self {
            user_id,
            customer_name: required_text("customerName", &dto.customer_name, MAX_LINE_LEN)?,
            customer_email: email(&dto.customer_email)?,
            item_title: required_text("itemTitle", &dto.item_title, MAX_LINE_LEN)?,
            quantity: dto.quantity,
            unit_price_cents: dto.unit_price_cents,
            total_cents,
            currency: currency(dto.currency.as_deref(), DEFAULT_CURRENCY)?,
            shipping_address: required_text("shippingAddress", &dto.shipping_address, 1_000)?,
        })
    }
}

/// `quantity * unit_price_cents` with overflow detection.
pub fn order_total(quantity: i32, unit_price_cents: i64) -> Result<i64, AppError> {
    unit_price_cents
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| InternalError::AmountOverflow("order total").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkout(quantity: i32, unit_price_cents: i64) -> CreateOrderDto {
        CreateOrderDto {
            customer_name: "Meron".to_string(),
            customer_email: "meron@example.org".to_string(),
            item_title: "Collected Speeches".to_string(),
            quantity,
            unit_price_cents,
            currency: None,
            shipping_address: "Bole, Addis Ababa".to_string(),
        }
    }

    #[test]
    fn computes_total_server_side() {
        let params = CreateOrderParams::from_dto(None, checkout(3, 45_000)).unwrap();

        assert_eq!(params.total_cents, 135_000);
        assert_eq!(params.currency, "ETB");
    }

    #[test]
    fn rejects_quantity_outside_range() {
        for quantity in [0, -1, MAX_QUANTITY + 1] {
            assert!(matches!(
                CreateOrderParams::from_dto(None, checkout(quantity, 100)),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn rejects_non_positive_price() {
        assert!(CreateOrderParams::from_dto(None, checkout(1, 0)).is_err());
    }

    #[test]
    fn detects_total_overflow() {
        assert!(matches!(
            order_total(100, i64::MAX / 10),
            Err(AppError::InternalErr(InternalError::AmountOverflow(_)))
        ));
    }

    #[test]
    fn delivered_orders_can_only_be_refunded() {
        assert_eq!(OrderStatus::Delivered.next_states(), &[OrderStatus::Refunded]);
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
    }
}
