use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::publication::PublicationStatus,
    server::{
        data::{
            resource::{patch, Resource, ResourceRepository},
            tag::{TagRepository, TagScope},
        },
        model::publication::{
            CreatePublicationParams, Publication, PublicationFilter, PublicationSortBy,
            UpdatePublicationParams,
        },
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::publication::Column;

pub struct PublicationResource;

impl Resource for PublicationResource {
    type Entity = entity::prelude::Publication;
    type Filter = PublicationFilter;
    type SortBy = PublicationSortBy;

    const LABEL: &'static str = "Publication";
    const DEFAULT_LIMIT: u64 = 12;
    const TAG_SCOPE: Option<TagScope> = Some(TagScope::Publication);

    fn id_column() -> Column {
        Column::Id
    }

    fn slug_column() -> Option<Column> {
        Some(Column::Slug)
    }

    fn sort_column(by: PublicationSortBy) -> Column {
        match by {
            PublicationSortBy::CreatedAt => Column::CreatedAt,
            PublicationSortBy::PublishedYear => Column::PublishedYear,
            PublicationSortBy::Title => Column::Title,
            PublicationSortBy::DownloadCount => Column::DownloadCount,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[
            Column::Title,
            Column::TitleAm,
            Column::TitleOr,
            Column::Description,
            Column::Publisher,
        ]
    }

    fn filter(filter: &PublicationFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .eq(Column::Kind, filter.kind.map(|k| k.to_string()))
            .eq(Column::IsFree, filter.is_free)
            .eq(Column::Featured, filter.featured)
            .eq(Column::AuthorId, filter.author_id)
            .search(Self::search_columns(), filter.search.as_deref())
    }

    fn tags(filter: &PublicationFilter) -> Option<&[String]> {
        filter.tags.as_deref()
    }
}

pub struct PublicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, PublicationResource> {
        ResourceRepository::new(self.db)
    }

    async fn with_tags(&self, model: entity::publication::Model) -> Result<Publication, DbErr> {
        let tags = TagRepository::new(self.db)
            .get_for_item(TagScope::Publication, model.id)
            .await?;

        Publication::from_entity(model, tags)
    }

    async fn get_model(&self, id: i32) -> Result<entity::publication::Model, DbErr> {
        entity::prelude::Publication::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Publication with id {} not found",
                id
            )))
    }

    pub async fn list(
        &self,
        params: &ListParams<PublicationFilter, PublicationSortBy>,
    ) -> Result<Page<Publication>, DbErr> {
        let page = self.resource().list(params).await?;

        let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
        let mut tags = TagRepository::new(self.db)
            .get_for_items(TagScope::Publication, &ids)
            .await?;

        page.try_map(|model| {
            let item_tags = tags.remove(&model.id).unwrap_or_default();
            Publication::from_entity(model, item_tags)
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Publication>, DbErr> {
        match self.resource().find_by_id(id).await? {
            Some(model) => Ok(Some(self.with_tags(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Publication>, DbErr> {
        match self.resource().find_by_slug(slug).await? {
            Some(model) => Ok(Some(self.with_tags(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn create(
        &self,
        params: CreatePublicationParams,
        slug: String,
    ) -> Result<Publication, DbErr> {
        let now = Utc::now();
        let published_at = (params.status == PublicationStatus::Published).then_some(now);

        let model = entity::publication::ActiveModel {
            slug: ActiveValue::Set(slug),
            title: ActiveValue::Set(params.title),
            title_am: ActiveValue::Set(params.title_am),
            title_or: ActiveValue::Set(params.title_or),
            description: ActiveValue::Set(params.description),
            description_am: ActiveValue::Set(params.description_am),
            description_or: ActiveValue::Set(params.description_or),
            kind: ActiveValue::Set(params.kind.to_string()),
            publisher: ActiveValue::Set(params.publisher),
            published_year: ActiveValue::Set(params.published_year),
            file_url: ActiveValue::Set(params.file_url),
            cover_image: ActiveValue::Set(params.cover_image),
            is_free: ActiveValue::Set(params.is_free),
            featured: ActiveValue::Set(params.featured),
            status: ActiveValue::Set(params.status.to_string()),
            download_count: ActiveValue::Set(0),
            author_id: ActiveValue::Set(params.author_id),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TagRepository::new(self.db)
            .set_for_item(TagScope::Publication, model.id, &params.tags)
            .await?;

        Publication::from_entity(model, params.tags)
    }

    pub async fn update(&self, params: UpdatePublicationParams) -> Result<Publication, DbErr> {
        let existing = self.get_model(params.id).await?;

        let mut active_model: entity::publication::ActiveModel = existing.into();
        patch(&mut active_model.slug, params.slug);
        patch(&mut active_model.title, params.title);
        patch(&mut active_model.title_am, params.title_am);
        patch(&mut active_model.title_or, params.title_or);
        patch(&mut active_model.description, params.description);
        patch(&mut active_model.description_am, params.description_am);
        patch(&mut active_model.description_or, params.description_or);
        patch(&mut active_model.kind, params.kind.map(|k| k.to_string()));
        patch(&mut active_model.publisher, params.publisher);
        patch(&mut active_model.published_year, params.published_year.map(Some));
        patch(&mut active_model.file_url, params.file_url);
        patch(&mut active_model.cover_image, params.cover_image);
        patch(&mut active_model.is_free, params.is_free);
        patch(&mut active_model.featured, params.featured);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        if let Some(tags) = params.tags {
            TagRepository::new(self.db)
                .set_for_item(TagScope::Publication, model.id, &tags)
                .await?;
        }

        self.with_tags(model).await
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: PublicationStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<Publication, DbErr> {
        let existing = self.get_model(id).await?;

        let mut active_model: entity::publication::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.to_string());
        patch(&mut active_model.published_at, published_at.map(Some));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        self.with_tags(model).await
    }

    pub async fn increment_downloads(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().increment(id, Column::DownloadCount).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().delete(id).await
    }
}
