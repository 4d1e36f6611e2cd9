use sea_orm::DatabaseConnection;

use crate::server::{
    data::plan::{PlanRepository, PlanResource},
    error::AppError,
    model::plan::{CreatePlanParams, Plan, PlanFilter, PlanSortBy, UpdatePlanParams},
    query::{pager::Page, ListParams},
    service::slug,
};

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &ListParams<PlanFilter, PlanSortBy>,
    ) -> Result<Page<Plan>, AppError> {
        Ok(PlanRepository::new(self.db).list(params).await?)
    }

    /// Gets a page of plans open for subscription.
    pub async fn list_active(
        &self,
        mut params: ListParams<PlanFilter, PlanSortBy>,
    ) -> Result<Page<Plan>, AppError> {
        params.filter.is_active = Some(true);

        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Plan, AppError> {
        PlanRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Plan", id))
    }

    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, AppError> {
        let slug =
            slug::resolve_new::<PlanResource>(self.db, params.slug.clone(), &params.name).await?;

        let conflict =
            AppError::conflict_on_unique(format!("Plan with slug '{}' already exists", slug));

        PlanRepository::new(self.db)
            .create(params, slug)
            .await
            .map_err(conflict)
    }

    pub async fn update(&self, params: UpdatePlanParams) -> Result<Plan, AppError> {
        let existing = self.get_by_id(params.id).await?;

        if let Some(new_slug) = params.slug.as_deref().filter(|s| *s != existing.slug) {
            slug::ensure_available::<PlanResource>(self.db, new_slug, Some(existing.id)).await?;
        }

        PlanRepository::new(self.db)
            .update(params)
            .await
            .map_err(AppError::conflict_on_unique("Plan slug is already in use"))
    }

    /// Deletes a plan nobody ever subscribed to.
    ///
    /// # Returns
    /// - `Ok(())` - Plan deleted
    /// - `Err(AppError::NotFound)` - No plan with that id
    /// - `Err(AppError::Conflict)` - Subscriptions reference the plan; deactivate it instead
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PlanRepository::new(self.db);
        self.get_by_id(id).await?;

        if repo.has_subscriptions(id).await? {
            return Err(AppError::Conflict(format!(
                "Plan {} has subscriptions; deactivate it instead",
                id
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
