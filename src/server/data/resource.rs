//! Generic list/read/delete/counter operations shared by every resource.
//!
//! A resource describes its table once through the [`Resource`] trait (filter type, sort
//! keys, searchable columns, tag scope, slug column). [`ResourceRepository`] then
//! provides the operations every admin and public listing needs, so the per-entity
//! repositories only implement what is specific to them (inserts and updates).

use std::marker::PhantomData;

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Value,
};

use crate::server::{
    data::tag::{TagRepository, TagScope},
    query::{
        filter::FilterBuilder,
        pager::{Page, PageRequest},
        sort::SortKey,
        ListParams,
    },
};

pub type ColumnOf<R> = <<R as Resource>::Entity as EntityTrait>::Column;
pub type ModelOf<R> = <<R as Resource>::Entity as EntityTrait>::Model;

/// Static description of a listable table.
pub trait Resource {
    type Entity: EntityTrait;
    type Filter: Send + Sync;
    type SortBy: SortKey + Send + Sync;

    /// Human readable name used in error messages.
    const LABEL: &'static str;

    /// Page size used when a request does not specify one.
    const DEFAULT_LIMIT: u64;

    /// Scope of the resource's rows in the `content_tag` table, if it is taggable.
    const TAG_SCOPE: Option<TagScope> = None;

    fn id_column() -> ColumnOf<Self>;

    fn slug_column() -> Option<ColumnOf<Self>> {
        None
    }

    fn sort_column(by: Self::SortBy) -> ColumnOf<Self>;

    /// Columns matched by the free text `search` filter.
    fn search_columns() -> &'static [ColumnOf<Self>];

    /// Translates the typed filter (including its search term) into conditions.
    fn filter(filter: &Self::Filter) -> FilterBuilder;

    /// Tags the listed rows must carry at least one of.
    fn tags(_filter: &Self::Filter) -> Option<&[String]> {
        None
    }
}

pub struct ResourceRepository<'a, R> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R> ResourceRepository<'a, R>
where
    R: Resource,
    ModelOf<R>: Send + Sync + 'static,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Gets one page of rows matching the filter.
    ///
    /// Rows are ordered by the requested sort column and then by id in the same direction,
    /// so pages never overlap or skip rows between requests. A tag filter that matches no
    /// item short-circuits to an empty page.
    ///
    /// # Arguments
    /// - `params` - Filter, sort and raw page values
    ///
    /// # Returns
    /// - `Ok(Page)` - Matching rows for the page with total count metadata
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        params: &ListParams<R::Filter, R::SortBy>,
    ) -> Result<Page<ModelOf<R>>, DbErr> {
        let request = PageRequest::new(params.page, params.limit, R::DEFAULT_LIMIT);
        let mut builder = R::filter(&params.filter);

        if let (Some(scope), Some(tags)) = (R::TAG_SCOPE, R::tags(&params.filter)) {
            let ids = TagRepository::new(self.db)
                .item_ids_with_any(scope, tags)
                .await?;
            if ids.is_empty() {
                return Ok(Page::new(Vec::new(), request, 0));
            }
            builder = builder.id_in(R::id_column(), ids);
        }

        let query = R::Entity::find().filter(builder.build());
        let total = query.clone().count(self.db).await?;

        let order = params.sort.order.into_order();
        let rows = query
            .order_by(R::sort_column(params.sort.by), order.clone())
            .order_by(R::id_column(), order)
            .limit(request.limit())
            .offset(request.offset())
            .all(self.db)
            .await?;

        Ok(Page::new(rows, request, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ModelOf<R>>, DbErr> {
        R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(self.db)
            .await
    }

    /// Finds a row by slug; always `None` for resources without a slug column.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<ModelOf<R>>, DbErr> {
        let Some(column) = R::slug_column() else {
            return Ok(None);
        };

        R::Entity::find()
            .filter(column.eq(slug))
            .one(self.db)
            .await
    }

    /// Checks whether `slug` is used by a row other than `exclude_id`.
    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let Some(column) = R::slug_column() else {
            return Ok(false);
        };

        let mut query = R::Entity::find().filter(column.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(R::id_column().ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Deletes a row and, for taggable resources, its tags.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            if let Some(scope) = R::TAG_SCOPE {
                TagRepository::new(self.db).delete_for_item(scope, id).await?;
            }
        }

        Ok(result.rows_affected > 0)
    }

    /// Adds one to a counter column in a single `UPDATE ... SET c = c + 1`.
    ///
    /// The database performs the read-modify-write, so concurrent increments are never
    /// lost.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No row with that id
    pub async fn increment(&self, id: i32, column: ColumnOf<R>) -> Result<bool, DbErr> {
        let result = R::Entity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(R::id_column().eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts rows matching the filter, ignoring tags and paging.
    pub async fn count(&self, filter: &R::Filter) -> Result<u64, DbErr> {
        R::Entity::find()
            .filter(R::filter(filter).build())
            .count(self.db)
            .await
    }
}

/// Overwrites an active model field when an update supplies a value.
pub fn patch<V>(field: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(value);
    }
}
