use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "book_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Empty for guest checkouts.
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub item_title: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub currency: String,
    #[sea_orm(column_type = "Text")]
    pub shipping_address: String,
    pub status: String,
    pub paid_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
