pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_article_table;
mod m20260105_000003_create_publication_table;
mod m20260105_000004_create_content_tag_table;
mod m20260112_000005_create_contact_submission_table;
mod m20260112_000006_create_newsletter_subscriber_table;
mod m20260119_000007_create_plan_table;
mod m20260119_000008_create_subscription_table;
mod m20260126_000009_create_book_order_table;
mod m20260202_000010_create_gallery_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_article_table::Migration),
            Box::new(m20260105_000003_create_publication_table::Migration),
            Box::new(m20260105_000004_create_content_tag_table::Migration),
            Box::new(m20260112_000005_create_contact_submission_table::Migration),
            Box::new(m20260112_000006_create_newsletter_subscriber_table::Migration),
            Box::new(m20260119_000007_create_plan_table::Migration),
            Box::new(m20260119_000008_create_subscription_table::Migration),
            Box::new(m20260126_000009_create_book_order_table::Migration),
            Box::new(m20260202_000010_create_gallery_item_table::Migration),
        ]
    }
}
