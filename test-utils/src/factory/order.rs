//! Book order factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    customer_name: String,
    customer_email: String,
    item_title: String,
    quantity: i32,
    unit_price_cents: i64,
    status: String,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for a pending guest order of one 250 ETB book.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            customer_name: format!("Customer {}", id),
            customer_email: format!("customer{}@example.com", id),
            item_title: format!("Book {}", id),
            quantity: 1,
            unit_price_cents: 25_000,
            status: "pending".to_string(),
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn item_title(mut self, item_title: impl Into<String>) -> Self {
        self.item_title = item_title.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_price_cents(mut self, unit_price_cents: i64) -> Self {
        self.unit_price_cents = unit_price_cents;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::book_order::Model, DbErr> {
        let now = Utc::now();
        let paid_at = matches!(self.status.as_str(), "paid" | "shipped" | "delivered")
            .then_some(now);

        entity::book_order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            customer_name: ActiveValue::Set(self.customer_name),
            customer_email: ActiveValue::Set(self.customer_email),
            item_title: ActiveValue::Set(self.item_title),
            quantity: ActiveValue::Set(self.quantity),
            unit_price_cents: ActiveValue::Set(self.unit_price_cents),
            total_cents: ActiveValue::Set(self.unit_price_cents * self.quantity as i64),
            currency: ActiveValue::Set("ETB".to_string()),
            shipping_address: ActiveValue::Set("Bole, Addis Ababa".to_string()),
            status: ActiveValue::Set(self.status),
            paid_at: ActiveValue::Set(paid_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_order(db: &DatabaseConnection) -> Result<entity::book_order::Model, DbErr> {
    OrderFactory::new(db).build().await
}
