//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and shortcuts for creating entities together with the
//! rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for emails, slugs and titles so rows created by different factories never
/// collide on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an editor and a draft article written by them.
///
/// # Returns
/// - `Ok((author, article))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::article::Model), DbErr> {
    let author = crate::factory::user::create_editor(db).await?;
    let article = crate::factory::article::create_article(db, author.id).await?;

    Ok((author, article))
}

/// Creates a member, an active monthly plan and a pending subscription linking them.
///
/// # Returns
/// - `Ok((member, plan, subscription))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_subscription_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::plan::Model,
        entity::subscription::Model,
    ),
    DbErr,
> {
    let member = crate::factory::user::create_user(db).await?;
    let plan = crate::factory::plan::create_plan(db).await?;
    let subscription =
        crate::factory::subscription::create_subscription(db, member.id, plan.id).await?;

    Ok((member, plan, subscription))
}
