use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::subscription::SubscriptionStatus,
    server::{
        data::{plan::PlanRepository, subscription::SubscriptionRepository},
        error::AppError,
        model::subscription::{
            Subscription, SubscriptionFilter, SubscriptionSortBy, SubscriptionStatusChange,
        },
        query::{guard::ensure_owner, lifecycle::ensure_transition, pager::Page, ListParams},
    },
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a pending subscription of `user_id` to `plan_id`.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The pending subscription
    /// - `Err(AppError::NotFound)` - No plan with that id
    /// - `Err(AppError::BadRequest)` - The plan is not active
    /// - `Err(AppError::Conflict)` - The user already has a pending or active subscription
    pub async fn subscribe(&self, user_id: i32, plan_id: i32) -> Result<Subscription, AppError> {
        let plan = PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| AppError::not_found("Plan", plan_id))?;
        if !plan.is_active {
            return Err(AppError::BadRequest(format!(
                "Plan '{}' is not open for subscription",
                plan.slug
            )));
        }

        let repo = SubscriptionRepository::new(self.db);
        if let Some(open) = repo.find_open_for_user(user_id).await? {
            return Err(AppError::Conflict(format!(
                "You already have a {} subscription ({})",
                open.status, open.id
            )));
        }

        Ok(repo.create(user_id, plan_id).await?)
    }

    pub async fn list(
        &self,
        params: &ListParams<SubscriptionFilter, SubscriptionSortBy>,
    ) -> Result<Page<Subscription>, AppError> {
        Ok(SubscriptionRepository::new(self.db).list(params).await?)
    }

    /// Gets a page of the subscriptions held by `user_id`.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        mut params: ListParams<SubscriptionFilter, SubscriptionSortBy>,
    ) -> Result<Page<Subscription>, AppError> {
        params.filter.user_id = Some(user_id);

        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Subscription, AppError> {
        SubscriptionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Subscription", id))
    }

    /// Cancels a subscription on behalf of its holder.
    pub async fn cancel(&self, user_id: i32, id: i32) -> Result<Subscription, AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.user_id, "subscription", id)?;

        self.transition(existing, SubscriptionStatus::Cancelled)
            .await
    }

    /// Moves a subscription to `status` from the back office.
    ///
    /// Activation starts the billing period: `started_at` is now and `ends_at` is one plan
    /// interval later.
    pub async fn set_status(
        &self,
        id: i32,
        status: SubscriptionStatus,
    ) -> Result<Subscription, AppError> {
        let existing = self.get_by_id(id).await?;

        self.transition(existing, status).await
    }

    async fn transition(
        &self,
        existing: Subscription,
        status: SubscriptionStatus,
    ) -> Result<Subscription, AppError> {
        ensure_transition("Subscription", existing.status, status)?;
        if existing.status == status {
            return Ok(existing);
        }

        let now = Utc::now();
        let mut change = SubscriptionStatusChange {
            status: Some(status),
            ..Default::default()
        };

        match status {
            SubscriptionStatus::Active => {
                let plan = PlanRepository::new(self.db)
                    .find_by_id(existing.plan_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Plan", existing.plan_id))?;
                change.started_at = Some(now);
                change.ends_at = Some(now + plan.interval.period());
            }
            SubscriptionStatus::Cancelled => change.cancelled_at = Some(now),
            SubscriptionStatus::Pending | SubscriptionStatus::Expired => {}
        }

        Ok(SubscriptionRepository::new(self.db)
            .update_status(existing.id, change)
            .await?)
    }
}
