use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::article::ArticleStatus,
    server::{
        data::{
            resource::{patch, Resource, ResourceRepository},
            tag::{TagRepository, TagScope},
        },
        model::article::{
            Article, ArticleFilter, ArticleSortBy, CreateArticleParams, UpdateArticleParams,
        },
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::article::Column;

pub struct ArticleResource;

impl Resource for ArticleResource {
    type Entity = entity::prelude::Article;
    type Filter = ArticleFilter;
    type SortBy = ArticleSortBy;

    const LABEL: &'static str = "Article";
    const DEFAULT_LIMIT: u64 = 10;
    const TAG_SCOPE: Option<TagScope> = Some(TagScope::Article);

    fn id_column() -> Column {
        Column::Id
    }

    fn slug_column() -> Option<Column> {
        Some(Column::Slug)
    }

    fn sort_column(by: ArticleSortBy) -> Column {
        match by {
            ArticleSortBy::CreatedAt => Column::CreatedAt,
            ArticleSortBy::UpdatedAt => Column::UpdatedAt,
            ArticleSortBy::PublishedAt => Column::PublishedAt,
            ArticleSortBy::Title => Column::Title,
            ArticleSortBy::ViewCount => Column::ViewCount,
            ArticleSortBy::LikeCount => Column::LikeCount,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[
            Column::Title,
            Column::TitleAm,
            Column::TitleOr,
            Column::Excerpt,
            Column::Content,
        ]
    }

    fn filter(filter: &ArticleFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .eq(Column::Kind, filter.kind.map(|k| k.to_string()))
            .eq(Column::Featured, filter.featured)
            .eq(Column::IsPremium, filter.is_premium)
            .eq(Column::AuthorId, filter.author_id)
            .search(Self::search_columns(), filter.search.as_deref())
    }

    fn tags(filter: &ArticleFilter) -> Option<&[String]> {
        filter.tags.as_deref()
    }
}

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, ArticleResource> {
        ResourceRepository::new(self.db)
    }

    async fn with_tags(&self, model: entity::article::Model) -> Result<Article, DbErr> {
        let tags = TagRepository::new(self.db)
            .get_for_item(TagScope::Article, model.id)
            .await?;

        Article::from_entity(model, tags)
    }

    /// Gets a page of articles with their tags.
    pub async fn list(
        &self,
        params: &ListParams<ArticleFilter, ArticleSortBy>,
    ) -> Result<Page<Article>, DbErr> {
        let page = self.resource().list(params).await?;

        let ids: Vec<i32> = page.items.iter().map(|a| a.id).collect();
        let mut tags = TagRepository::new(self.db)
            .get_for_items(TagScope::Article, &ids)
            .await?;

        page.try_map(|model| {
            let item_tags = tags.remove(&model.id).unwrap_or_default();
            Article::from_entity(model, item_tags)
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        match self.resource().find_by_id(id).await? {
            Some(model) => Ok(Some(self.with_tags(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, DbErr> {
        match self.resource().find_by_slug(slug).await? {
            Some(model) => Ok(Some(self.with_tags(model).await?)),
            None => Ok(None),
        }
    }

    /// Inserts a new article with its tags.
    ///
    /// `published_at` is stamped when the article is created directly as published.
    ///
    /// # Arguments
    /// - `params` - Validated article fields
    /// - `slug` - Unique slug resolved by the caller
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article
    /// - `Err(DbErr)` - Database error, including a unique violation on `slug`
    pub async fn create(&self, params: CreateArticleParams, slug: String) -> Result<Article, DbErr> {
        let now = Utc::now();
        let published_at = (params.status == ArticleStatus::Published).then_some(now);

        let model = entity::article::ActiveModel {
            slug: ActiveValue::Set(slug),
            kind: ActiveValue::Set(params.kind.to_string()),
            title: ActiveValue::Set(params.title),
            title_am: ActiveValue::Set(params.title_am),
            title_or: ActiveValue::Set(params.title_or),
            excerpt: ActiveValue::Set(params.excerpt),
            excerpt_am: ActiveValue::Set(params.excerpt_am),
            excerpt_or: ActiveValue::Set(params.excerpt_or),
            content: ActiveValue::Set(params.content),
            content_am: ActiveValue::Set(params.content_am),
            content_or: ActiveValue::Set(params.content_or),
            cover_image: ActiveValue::Set(params.cover_image),
            status: ActiveValue::Set(params.status.to_string()),
            featured: ActiveValue::Set(params.featured),
            is_premium: ActiveValue::Set(params.is_premium),
            author_id: ActiveValue::Set(params.author_id),
            view_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TagRepository::new(self.db)
            .set_for_item(TagScope::Article, model.id, &params.tags)
            .await?;

        Article::from_entity(model, params.tags)
    }

    /// Applies a partial update; tags are replaced only when supplied.
    pub async fn update(&self, params: UpdateArticleParams) -> Result<Article, DbErr> {
        let existing = entity::prelude::Article::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::article::ActiveModel = existing.into();
        patch(&mut active_model.slug, params.slug);
        patch(&mut active_model.kind, params.kind.map(|k| k.to_string()));
        patch(&mut active_model.title, params.title);
        patch(&mut active_model.title_am, params.title_am);
        patch(&mut active_model.title_or, params.title_or);
        patch(&mut active_model.excerpt, params.excerpt);
        patch(&mut active_model.excerpt_am, params.excerpt_am);
        patch(&mut active_model.excerpt_or, params.excerpt_or);
        patch(&mut active_model.content, params.content);
        patch(&mut active_model.content_am, params.content_am);
        patch(&mut active_model.content_or, params.content_or);
        patch(&mut active_model.cover_image, params.cover_image);
        patch(&mut active_model.featured, params.featured);
        patch(&mut active_model.is_premium, params.is_premium);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        if let Some(tags) = params.tags {
            TagRepository::new(self.db)
                .set_for_item(TagScope::Article, model.id, &tags)
                .await?;
        }

        self.with_tags(model).await
    }

    /// Writes a new status, stamping `published_at` when given.
    pub async fn set_status(
        &self,
        id: i32,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<Article, DbErr> {
        let existing = entity::prelude::Article::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found",
                id
            )))?;

        let mut active_model: entity::article::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.to_string());
        patch(&mut active_model.published_at, published_at.map(Some));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        self.with_tags(model).await
    }

    pub async fn increment_views(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().increment(id, Column::ViewCount).await
    }

    pub async fn increment_likes(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().increment(id, Column::LikeCount).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().delete(id).await
    }
}
