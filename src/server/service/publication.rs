use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::publication::PublicationStatus,
    server::{
        data::publication::{PublicationRepository, PublicationResource},
        error::{auth::AuthError, AppError},
        model::{
            member::Member,
            publication::{
                CreatePublicationParams, Publication, PublicationFilter, PublicationSortBy,
                UpdatePublicationParams,
            },
        },
        query::{guard::ensure_owner, lifecycle::ensure_transition, pager::Page, ListParams},
        service::slug,
    },
};

/// Result of a counted download.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_url: Option<String>,
    pub download_count: i32,
}

pub struct PublicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        params: &ListParams<PublicationFilter, PublicationSortBy>,
    ) -> Result<Page<Publication>, AppError> {
        Ok(PublicationRepository::new(self.db).list(params).await?)
    }

    /// Gets a page of published publications; a requested status is overridden.
    pub async fn list_published(
        &self,
        mut params: ListParams<PublicationFilter, PublicationSortBy>,
    ) -> Result<Page<Publication>, AppError> {
        params.filter.status = Some(PublicationStatus::Published);

        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Publication, AppError> {
        PublicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Publication", id))
    }

    pub async fn get_published_by_slug(&self, slug: &str) -> Result<Publication, AppError> {
        PublicationRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|p| p.status == PublicationStatus::Published)
            .ok_or_else(|| AppError::NotFound(format!("Publication '{}' not found", slug)))
    }

    /// Counts a download of a published publication and returns its file.
    ///
    /// # Arguments
    /// - `member` - Logged in member, if any
    /// - `id` - Publication id
    ///
    /// # Returns
    /// - `Ok(Download)` - File URL and the incremented download count
    /// - `Err(AppError::NotFound)` - No published publication with that id
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Premium file requested anonymously
    pub async fn download(&self, member: Option<&Member>, id: i32) -> Result<Download, AppError> {
        let repo = PublicationRepository::new(self.db);

        let publication = repo
            .find_by_id(id)
            .await?
            .filter(|p| p.status == PublicationStatus::Published)
            .ok_or_else(|| AppError::not_found("Publication", id))?;

        if !publication.is_free && member.is_none() {
            return Err(AuthError::UserNotInSession.into());
        }

        repo.increment_downloads(id).await?;
        let updated = self.get_by_id(id).await?;

        Ok(Download {
            file_url: updated.file_url,
            download_count: updated.download_count,
        })
    }

    pub async fn create(&self, params: CreatePublicationParams) -> Result<Publication, AppError> {
        let slug =
            slug::resolve_new::<PublicationResource>(self.db, params.slug.clone(), &params.title)
                .await?;

        let conflict =
            AppError::conflict_on_unique(format!("Publication with slug '{}' already exists", slug));

        PublicationRepository::new(self.db)
            .create(params, slug)
            .await
            .map_err(conflict)
    }

    /// Updates a publication written by `user_id`, re-checking a changed slug.
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdatePublicationParams,
    ) -> Result<Publication, AppError> {
        let existing = self.get_by_id(params.id).await?;
        ensure_owner(user_id, existing.author_id, "publication", existing.id)?;

        if let Some(new_slug) = params.slug.as_deref().filter(|s| *s != existing.slug) {
            slug::ensure_available::<PublicationResource>(self.db, new_slug, Some(existing.id))
                .await?;
        }

        PublicationRepository::new(self.db)
            .update(params)
            .await
            .map_err(AppError::conflict_on_unique("Publication slug is already in use"))
    }

    pub async fn set_status(
        &self,
        user_id: i32,
        id: i32,
        status: PublicationStatus,
    ) -> Result<Publication, AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.author_id, "publication", id)?;
        ensure_transition("Publication", existing.status, status)?;

        let published_at = (status == PublicationStatus::Published
            && existing.published_at.is_none())
        .then(Utc::now);

        Ok(PublicationRepository::new(self.db)
            .set_status(id, status, published_at)
            .await?)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.author_id, "publication", id)?;

        PublicationRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
