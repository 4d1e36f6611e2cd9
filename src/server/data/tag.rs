//! Tags attached to articles, publications and gallery items.
//!
//! Tags live in one `content_tag` table keyed by `(scope, item_id, tag)` so that
//! "has any of these tags" filters are plain indexed lookups.

use std::collections::HashMap;

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use strum_macros::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TagScope {
    Article,
    Publication,
    Gallery,
}

impl TagScope {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ids of items in `scope` carrying at least one of `tags`.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Distinct item ids, empty when nothing matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn item_ids_with_any(
        &self,
        scope: TagScope,
        tags: &[String],
    ) -> Result<Vec<i32>, DbErr> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ContentTag::find()
            .select_only()
            .column(entity::content_tag::Column::ItemId)
            .distinct()
            .filter(entity::content_tag::Column::Scope.eq(scope.as_str()))
            .filter(entity::content_tag::Column::Tag.is_in(tags.iter().cloned()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces the tags of one item.
    pub async fn set_for_item(
        &self,
        scope: TagScope,
        item_id: i32,
        tags: &[String],
    ) -> Result<(), DbErr> {
        self.delete_for_item(scope, item_id).await?;

        if tags.is_empty() {
            return Ok(());
        }

        let rows = tags.iter().map(|tag| entity::content_tag::ActiveModel {
            scope: ActiveValue::Set(scope.as_str().to_string()),
            item_id: ActiveValue::Set(item_id),
            tag: ActiveValue::Set(tag.clone()),
            ..Default::default()
        });

        entity::prelude::ContentTag::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_for_item(&self, scope: TagScope, item_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::ContentTag::find()
            .select_only()
            .column(entity::content_tag::Column::Tag)
            .filter(entity::content_tag::Column::Scope.eq(scope.as_str()))
            .filter(entity::content_tag::Column::ItemId.eq(item_id))
            .order_by_asc(entity::content_tag::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Gets the tags of many items in one query, keyed by item id.
    pub async fn get_for_items(
        &self,
        scope: TagScope,
        item_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ContentTag::find()
            .filter(entity::content_tag::Column::Scope.eq(scope.as_str()))
            .filter(entity::content_tag::Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_asc(entity::content_tag::Column::Id)
            .all(self.db)
            .await?;

        let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
        for row in rows {
            tags.entry(row.item_id).or_default().push(row.tag);
        }

        Ok(tags)
    }

    pub async fn delete_for_item(&self, scope: TagScope, item_id: i32) -> Result<(), DbErr> {
        entity::prelude::ContentTag::delete_many()
            .filter(entity::content_tag::Column::Scope.eq(scope.as_str()))
            .filter(entity::content_tag::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
