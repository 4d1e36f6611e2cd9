//! Unique slug resolution for resources with a slug column.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::resource::{ModelOf, Resource, ResourceRepository},
    error::AppError,
    query::slug::{candidate, slugify},
};

/// Numbered candidates tried before giving up on a generated slug.
const MAX_ATTEMPTS: u32 = 1000;

/// Fails with Conflict when `slug` is used by a row other than `exclude_id`.
pub async fn ensure_available<R>(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError>
where
    R: Resource,
    ModelOf<R>: Send + Sync + 'static,
{
    if ResourceRepository::<R>::new(db)
        .slug_taken(slug, exclude_id)
        .await?
    {
        return Err(AppError::Conflict(format!(
            "{} with slug '{}' already exists",
            R::LABEL,
            slug
        )));
    }

    Ok(())
}

/// Picks the slug for a new row.
///
/// An explicit slug must be free. Otherwise the slug is derived from `source` and made
/// unique by appending `-2`, `-3`, ...
///
/// # Returns
/// - `Ok(String)` - Slug that no row uses
/// - `Err(AppError::Conflict)` - Explicit slug is taken
/// - `Err(AppError::BadRequest)` - No explicit slug and `source` yields none
pub async fn resolve_new<R>(
    db: &DatabaseConnection,
    explicit: Option<String>,
    source: &str,
) -> Result<String, AppError>
where
    R: Resource,
    ModelOf<R>: Send + Sync + 'static,
{
    if let Some(slug) = explicit {
        ensure_available::<R>(db, &slug, None).await?;
        return Ok(slug);
    }

    let base = slugify(source);
    if base.is_empty() {
        return Err(AppError::BadRequest(
            "slug is required when the title has no Latin letters or digits".to_string(),
        ));
    }

    let repo = ResourceRepository::<R>::new(db);
    for attempt in 1..=MAX_ATTEMPTS {
        let slug = candidate(&base, attempt);
        if !repo.slug_taken(&slug, None).await? {
            return Ok(slug);
        }
    }

    Err(AppError::Conflict(format!(
        "Could not find a free slug for '{}'",
        base
    )))
}
