//! Gallery service for business logic.
//!
//! Public readers only see published items; editors manage the items they uploaded.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::gallery::GalleryStatus,
    server::{
        data::gallery::GalleryRepository,
        error::AppError,
        model::gallery::{
            CreateGalleryItemParams, GalleryFilter, GalleryItem, GallerySortBy,
            UpdateGalleryItemParams,
        },
        query::{guard::ensure_owner, lifecycle::ensure_transition, pager::Page, ListParams},
    },
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &ListParams<GalleryFilter, GallerySortBy>,
    ) -> Result<Page<GalleryItem>, AppError> {
        Ok(GalleryRepository::new(self.db).list(params).await?)
    }

    /// Gets a page of published items; a requested status is overridden.
    pub async fn list_published(
        &self,
        mut params: ListParams<GalleryFilter, GallerySortBy>,
    ) -> Result<Page<GalleryItem>, AppError> {
        params.filter.status = Some(GalleryStatus::Published);

        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<GalleryItem, AppError> {
        GalleryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Gallery item", id))
    }

    /// Gets a published item; drafts and archived items read as missing.
    pub async fn get_published(&self, id: i32) -> Result<GalleryItem, AppError> {
        GalleryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|item| item.status == GalleryStatus::Published)
            .ok_or_else(|| AppError::not_found("Gallery item", id))
    }

    pub async fn create(&self, params: CreateGalleryItemParams) -> Result<GalleryItem, AppError> {
        Ok(GalleryRepository::new(self.db).create(params).await?)
    }

    /// Updates an item uploaded by `user_id`.
    ///
    /// # Returns
    /// - `Ok(GalleryItem)` - The updated item
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::AuthErr(NotOwner))` - `user_id` did not upload the item
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateGalleryItemParams,
    ) -> Result<GalleryItem, AppError> {
        let existing = self.get_by_id(params.id).await?;
        ensure_owner(user_id, existing.author_id, "gallery item", existing.id)?;

        Ok(GalleryRepository::new(self.db).update(params).await?)
    }

    /// Moves an item uploaded by `user_id` to `status`, stamping `published_at` the first
    /// time it is published.
    pub async fn set_status(
        &self,
        user_id: i32,
        id: i32,
        status: GalleryStatus,
    ) -> Result<GalleryItem, AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.author_id, "gallery item", id)?;
        ensure_transition("Gallery item", existing.status, status)?;

        let published_at =
            (status == GalleryStatus::Published && existing.published_at.is_none()).then(Utc::now);

        Ok(GalleryRepository::new(self.db)
            .set_status(id, status, published_at)
            .await?)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.author_id, "gallery item", id)?;

        GalleryRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
