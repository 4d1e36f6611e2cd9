use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::gallery::GalleryStatus,
    server::{
        data::{
            resource::{patch, Resource, ResourceRepository},
            tag::{TagRepository, TagScope},
        },
        model::gallery::{
            CreateGalleryItemParams, GalleryFilter, GalleryItem, GallerySortBy,
            UpdateGalleryItemParams,
        },
        query::{filter::FilterBuilder, pager::Page, ListParams},
    },
};

use entity::gallery_item::Column;

pub struct GalleryResource;

impl Resource for GalleryResource {
    type Entity = entity::prelude::GalleryItem;
    type Filter = GalleryFilter;
    type SortBy = GallerySortBy;

    const LABEL: &'static str = "Gallery item";
    const DEFAULT_LIMIT: u64 = 24;
    const TAG_SCOPE: Option<TagScope> = Some(TagScope::Gallery);

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(by: GallerySortBy) -> Column {
        match by {
            GallerySortBy::CreatedAt => Column::CreatedAt,
            GallerySortBy::Position => Column::Position,
            GallerySortBy::Title => Column::Title,
        }
    }

    fn search_columns() -> &'static [Column] {
        &[
            Column::Title,
            Column::TitleAm,
            Column::TitleOr,
            Column::Caption,
        ]
    }

    fn filter(filter: &GalleryFilter) -> FilterBuilder {
        FilterBuilder::new()
            .eq(Column::Status, filter.status.map(|s| s.to_string()))
            .eq(Column::Kind, filter.kind.map(|k| k.to_string()))
            .eq(Column::Featured, filter.featured)
            .eq(Column::AuthorId, filter.author_id)
            .search(Self::search_columns(), filter.search.as_deref())
    }

    fn tags(filter: &GalleryFilter) -> Option<&[String]> {
        filter.tags.as_deref()
    }
}

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn resource(&self) -> ResourceRepository<'a, GalleryResource> {
        ResourceRepository::new(self.db)
    }

    async fn with_tags(&self, model: entity::gallery_item::Model) -> Result<GalleryItem, DbErr> {
        let tags = TagRepository::new(self.db)
            .get_for_item(TagScope::Gallery, model.id)
            .await?;

        GalleryItem::from_entity(model, tags)
    }

    async fn get_model(&self, id: i32) -> Result<entity::gallery_item::Model, DbErr> {
        entity::prelude::GalleryItem::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Gallery item with id {} not found",
                id
            )))
    }

    pub async fn list(
        &self,
        params: &ListParams<GalleryFilter, GallerySortBy>,
    ) -> Result<Page<GalleryItem>, DbErr> {
        let page = self.resource().list(params).await?;

        let ids: Vec<i32> = page.items.iter().map(|g| g.id).collect();
        let mut tags = TagRepository::new(self.db)
            .get_for_items(TagScope::Gallery, &ids)
            .await?;

        page.try_map(|model| {
            let item_tags = tags.remove(&model.id).unwrap_or_default();
            GalleryItem::from_entity(model, item_tags)
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GalleryItem>, DbErr> {
        match self.resource().find_by_id(id).await? {
            Some(model) => Ok(Some(self.with_tags(model).await?)),
            None => Ok(None),
        }
    }

    /// Inserts a gallery item with its tags.
    ///
    /// `published_at` is stamped when the item is created directly as published.
    pub async fn create(&self, params: CreateGalleryItemParams) -> Result<GalleryItem, DbErr> {
        let now = Utc::now();
        let published_at = (params.status == GalleryStatus::Published).then_some(now);

        let model = entity::gallery_item::ActiveModel {
            title: ActiveValue::Set(params.title),
            title_am: ActiveValue::Set(params.title_am),
            title_or: ActiveValue::Set(params.title_or),
            caption: ActiveValue::Set(params.caption),
            caption_am: ActiveValue::Set(params.caption_am),
            caption_or: ActiveValue::Set(params.caption_or),
            kind: ActiveValue::Set(params.kind.to_string()),
            media_url: ActiveValue::Set(params.media_url),
            thumbnail_url: ActiveValue::Set(params.thumbnail_url),
            featured: ActiveValue::Set(params.featured),
            position: ActiveValue::Set(params.position),
            status: ActiveValue::Set(params.status.to_string()),
            author_id: ActiveValue::Set(params.author_id),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TagRepository::new(self.db)
            .set_for_item(TagScope::Gallery, model.id, &params.tags)
            .await?;

        GalleryItem::from_entity(model, params.tags)
    }

    pub async fn update(&self, params: UpdateGalleryItemParams) -> Result<GalleryItem, DbErr> {
        let existing = self.get_model(params.id).await?;

        let mut active_model: entity::gallery_item::ActiveModel = existing.into();
        patch(&mut active_model.title, params.title);
        patch(&mut active_model.title_am, params.title_am);
        patch(&mut active_model.title_or, params.title_or);
        patch(&mut active_model.caption, params.caption);
        patch(&mut active_model.caption_am, params.caption_am);
        patch(&mut active_model.caption_or, params.caption_or);
        patch(&mut active_model.kind, params.kind.map(|k| k.to_string()));
        patch(&mut active_model.media_url, params.media_url);
        patch(&mut active_model.thumbnail_url, params.thumbnail_url);
        patch(&mut active_model.featured, params.featured);
        patch(&mut active_model.position, params.position);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        if let Some(tags) = params.tags {
            TagRepository::new(self.db)
                .set_for_item(TagScope::Gallery, model.id, &tags)
                .await?;
        }

        self.with_tags(model).await
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: GalleryStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<GalleryItem, DbErr> {
        let existing = self.get_model(id).await?;

        let mut active_model: entity::gallery_item::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.to_string());
        patch(&mut active_model.published_at, published_at.map(Some));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        self.with_tags(model).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.resource().delete(id).await
    }
}
