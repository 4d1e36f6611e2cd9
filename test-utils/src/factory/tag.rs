use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Attaches tags to an item in the `content_tag` table.
///
/// # Arguments
/// - `scope` - `article`, `publication` or `gallery`
/// - `item_id` - Id of the tagged row
/// - `tags` - Tags to insert, already normalized
pub async fn attach_tags(
    db: &DatabaseConnection,
    scope: &str,
    item_id: i32,
    tags: &[&str],
) -> Result<(), DbErr> {
    if tags.is_empty() {
        return Ok(());
    }

    let rows = tags.iter().map(|tag| entity::content_tag::ActiveModel {
        scope: ActiveValue::Set(scope.to_string()),
        item_id: ActiveValue::Set(item_id),
        tag: ActiveValue::Set(tag.to_string()),
        ..Default::default()
    });

    entity::prelude::ContentTag::insert_many(rows)
        .exec(db)
        .await?;

    Ok(())
}
