use super::*;
use factory::article::ArticleFactory;

/// Tests a partial update.
///
/// Verifies that only supplied fields change, that `Some(None)` clears a nullable field
/// and that the author never changes.
///
/// Expected: Ok with the new title and cleared excerpt
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let existing = ArticleFactory::new(db, author.id)
        .content("Original body")
        .build()
        .await?;

    let updated = ArticleRepository::new(db)
        .update(UpdateArticleParams {
            id: existing.id,
            title: Some("New Title".to_string()),
            excerpt: Some(None),
            featured: Some(true),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.content, "Original body");
    assert_eq!(updated.slug, existing.slug);
    assert!(updated.excerpt.is_none());
    assert!(updated.featured);
    assert_eq!(updated.author_id, author.id);
    assert!(updated.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests replacing and keeping tags.
///
/// Expected: Ok with tags replaced when supplied and kept otherwise
#[tokio::test]
async fn replaces_tags_only_when_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let existing = ArticleFactory::new(db, author.id)
        .tags(&["law"])
        .build()
        .await?;
    let repo = ArticleRepository::new(db);

    let kept = repo
        .update(UpdateArticleParams {
            id: existing.id,
            title: Some("Retitled".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(kept.tags, vec!["law".to_string()]);

    let replaced = repo
        .update(UpdateArticleParams {
            id: existing.id,
            tags: Some(vec!["history".to_string()]),
            ..Default::default()
        })
        .await?;
    assert_eq!(replaced.tags, vec!["history".to_string()]);

    Ok(())
}

/// Tests updating an article that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db)
        .update(UpdateArticleParams {
            id: 999,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests writing a status with and without a publication time.
///
/// Expected: Ok with `published_at` kept after unpublishing
#[tokio::test]
async fn set_status_keeps_first_publication_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let existing = factory::create_article(db, author.id).await?;
    let repo = ArticleRepository::new(db);

    let published_at = chrono::Utc::now();
    let published = repo
        .set_status(existing.id, ArticleStatus::Published, Some(published_at))
        .await?;
    assert_eq!(published.status, ArticleStatus::Published);
    assert!(published.published_at.is_some());

    let draft = repo
        .set_status(existing.id, ArticleStatus::Draft, None)
        .await?;
    assert_eq!(draft.status, ArticleStatus::Draft);
    assert_eq!(draft.published_at, published.published_at);

    Ok(())
}

/// Tests that deleting an article also removes its tags.
///
/// Expected: Ok(true) then Ok(false) for a second delete, with no tag rows left
#[tokio::test]
async fn delete_removes_article_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let existing = ArticleFactory::new(db, author.id)
        .tags(&["law", "history"])
        .build()
        .await?;
    let repo = ArticleRepository::new(db);

    assert!(repo.delete(existing.id).await?);
    assert!(!repo.delete(existing.id).await?);

    assert!(repo.find_by_id(existing.id).await?.is_none());
    let tags = entity::prelude::ContentTag::find().count(db).await?;
    assert_eq!(tags, 0);

    Ok(())
}
