use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::article::ArticleStatus,
    server::{
        data::article::{ArticleRepository, ArticleResource},
        error::AppError,
        model::article::{
            Article, ArticleFilter, ArticleSortBy, CreateArticleParams, UpdateArticleParams,
        },
        query::{
            guard::ensure_owner, lifecycle::ensure_transition, pager::Page, ListParams,
        },
        service::slug,
    },
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of articles in any status for the back office.
    pub async fn list(
        &self,
        params: &ListParams<ArticleFilter, ArticleSortBy>,
    ) -> Result<Page<Article>, AppError> {
        Ok(ArticleRepository::new(self.db).list(params).await?)
    }

    /// Gets a page of published articles; a requested status is overridden.
    pub async fn list_published(
        &self,
        mut params: ListParams<ArticleFilter, ArticleSortBy>,
    ) -> Result<Page<Article>, AppError> {
        params.filter.status = Some(ArticleStatus::Published);

        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article", id))
    }

    /// Reads a published article by slug and counts the view.
    ///
    /// The counter is incremented in the database before the article is read back, so
    /// the returned `view_count` includes this view.
    ///
    /// # Returns
    /// - `Ok(Article)` - The published article
    /// - `Err(AppError::NotFound)` - No article with that slug, or it is not published
    pub async fn view_published(&self, slug: &str) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        let article = repo
            .find_by_slug(slug)
            .await?
            .filter(|a| a.status == ArticleStatus::Published)
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))?;

        repo.increment_views(article.id).await?;

        self.get_by_id(article.id).await
    }

    /// Adds a like to a published article.
    pub async fn like(&self, id: i32) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        let published = repo
            .find_by_id(id)
            .await?
            .is_some_and(|a| a.status == ArticleStatus::Published);
        if !published || !repo.increment_likes(id).await? {
            return Err(AppError::not_found("Article", id));
        }

        self.get_by_id(id).await
    }

    /// Creates an article after resolving a unique slug.
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article
    /// - `Err(AppError::Conflict)` - Explicit slug already used
    /// - `Err(AppError::BadRequest)` - No slug given and the title yields none
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        let slug =
            slug::resolve_new::<ArticleResource>(self.db, params.slug.clone(), &params.title)
                .await?;

        let conflict =
            AppError::conflict_on_unique(format!("Article with slug '{}' already exists", slug));

        ArticleRepository::new(self.db)
            .create(params, slug)
            .await
            .map_err(conflict)
    }

    /// Updates an article written by `user_id`.
    ///
    /// A changed slug must not be used by another article; resubmitting the current slug
    /// is accepted.
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::AuthErr(NotOwner))` - `user_id` is not the author
    /// - `Err(AppError::Conflict)` - New slug already used
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateArticleParams,
    ) -> Result<Article, AppError> {
        let existing = self.get_by_id(params.id).await?;
        ensure_owner(user_id, existing.author_id, "article", existing.id)?;

        if let Some(new_slug) = params.slug.as_deref().filter(|s| *s != existing.slug) {
            slug::ensure_available::<ArticleResource>(self.db, new_slug, Some(existing.id))
                .await?;
        }

        ArticleRepository::new(self.db)
            .update(params)
            .await
            .map_err(AppError::conflict_on_unique("Article slug is already in use"))
    }

    /// Moves an article written by `user_id` to `status`.
    ///
    /// Publishing stamps `published_at` unless the article was published before.
    pub async fn set_status(
        &self,
        user_id: i32,
        id: i32,
        status: ArticleStatus,
    ) -> Result<Article, AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.author_id, "article", id)?;
        ensure_transition("Article", existing.status, status)?;

        let published_at = (status == ArticleStatus::Published && existing.published_at.is_none())
            .then(Utc::now);

        Ok(ArticleRepository::new(self.db)
            .set_status(id, status, published_at)
            .await?)
    }

    /// Deletes an article written by `user_id` along with its tags.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner(user_id, existing.author_id, "article", id)?;

        ArticleRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
