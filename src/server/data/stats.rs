//! Aggregate counts for the admin dashboard.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};
use strum::IntoEnumIterator;

use crate::{
    model::{
        article::ArticleStatus, contact::ContactStatus, newsletter::SubscriberStatus,
        order::OrderStatus, publication::PublicationStatus, subscription::SubscriptionStatus,
    },
    server::{
        data::{
            article::ArticleResource, contact::ContactResource, newsletter::SubscriberResource,
            order::OrderResource, publication::PublicationResource, resource::ResourceRepository,
            subscription::SubscriptionResource,
        },
        model::{
            article::ArticleFilter, contact::ContactFilter, newsletter::SubscriberFilter,
            order::OrderFilter, publication::PublicationFilter, stats::DashboardStats,
            subscription::SubscriptionFilter,
        },
    },
};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers every dashboard figure.
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - Counts and paid revenue
    /// - `Err(DbErr)` - The first query that failed; no figure is defaulted
    pub async fn dashboard(&self) -> Result<DashboardStats, DbErr> {
        let articles = ResourceRepository::<ArticleResource>::new(self.db);
        let mut articles_by_status: Vec<(&'static str, u64)> = Vec::new();
        for status in ArticleStatus::iter() {
            let filter = ArticleFilter {
                status: Some(status),
                ..Default::default()
            };
            articles_by_status.push((status.into(), articles.count(&filter).await?));
        }

        let publications = ResourceRepository::<PublicationResource>::new(self.db);
        let publications_total = publications.count(&PublicationFilter::default()).await?;
        let publications_published = publications
            .count(&PublicationFilter {
                status: Some(PublicationStatus::Published),
                ..Default::default()
            })
            .await?;

        let new_contacts = ResourceRepository::<ContactResource>::new(self.db)
            .count(&ContactFilter {
                status: Some(ContactStatus::New),
                ..Default::default()
            })
            .await?;

        let active_subscribers = ResourceRepository::<SubscriberResource>::new(self.db)
            .count(&SubscriberFilter {
                status: Some(SubscriberStatus::Subscribed),
                ..Default::default()
            })
            .await?;

        let active_subscriptions = ResourceRepository::<SubscriptionResource>::new(self.db)
            .count(&SubscriptionFilter {
                status: Some(SubscriptionStatus::Active),
                ..Default::default()
            })
            .await?;

        let orders = ResourceRepository::<OrderResource>::new(self.db);
        let mut orders_by_status: Vec<(&'static str, u64)> = Vec::new();
        for status in OrderStatus::iter() {
            let filter = OrderFilter {
                status: Some(status),
                ..Default::default()
            };
            orders_by_status.push((status.into(), orders.count(&filter).await?));
        }

        Ok(DashboardStats {
            articles_by_status,
            publications_total,
            publications_published,
            new_contacts,
            active_subscribers,
            active_subscriptions,
            orders_by_status,
            revenue_cents: self.revenue_cents().await?,
        })
    }

    /// Sums `total_cents` over paid, shipped and delivered orders.
    pub async fn revenue_cents(&self) -> Result<i64, DbErr> {
        let paid = OrderStatus::REVENUE.map(|status| status.to_string());

        let revenue = entity::prelude::BookOrder::find()
            .select_only()
            .column_as(entity::book_order::Column::TotalCents.sum(), "revenue")
            .filter(entity::book_order::Column::Status.is_in(paid))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(revenue.flatten().unwrap_or(0))
    }
}
