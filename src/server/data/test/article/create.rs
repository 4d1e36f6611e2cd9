use super::*;

fn new_article(author_id: i32, status: ArticleStatus) -> CreateArticleParams {
    CreateArticleParams {
        author_id,
        slug: None,
        kind: ArticleKind::Article,
        title: "Land Reform".to_string(),
        title_am: None,
        title_or: None,
        excerpt: None,
        excerpt_am: None,
        excerpt_or: None,
        content: "Body".to_string(),
        content_am: None,
        content_or: None,
        cover_image: None,
        status,
        featured: false,
        is_premium: false,
        tags: vec!["law".to_string(), "policy".to_string()],
    }
}

/// Tests creating a draft article with tags.
///
/// Verifies that counters start at zero, no publication time is set and the tags are
/// stored alongside the article.
///
/// Expected: Ok with the stored article and its tags
#[tokio::test]
async fn creates_draft_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let repo = ArticleRepository::new(db);

    let article = repo
        .create(new_article(author.id, ArticleStatus::Draft), "land-reform".to_string())
        .await?;

    assert_eq!(article.slug, "land-reform");
    assert_eq!(article.author_id, author.id);
    assert_eq!(article.view_count, 0);
    assert_eq!(article.like_count, 0);
    assert!(article.published_at.is_none());

    let stored = repo.find_by_slug("land-reform").await?.unwrap();
    let mut tags = stored.tags.clone();
    tags.sort();
    assert_eq!(tags, vec!["law".to_string(), "policy".to_string()]);

    Ok(())
}

/// Tests creating an article directly as published.
///
/// Expected: Ok with `published_at` set
#[tokio::test]
async fn stamps_published_at_when_created_published() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;

    let article = ArticleRepository::new(db)
        .create(
            new_article(author.id, ArticleStatus::Published),
            "published-now".to_string(),
        )
        .await?;

    assert_eq!(article.status, ArticleStatus::Published);
    assert!(article.published_at.is_some());

    Ok(())
}

/// Tests that the unique index on slug backs up the service check.
///
/// Expected: Err from the database and only one stored article
#[tokio::test]
async fn rejects_duplicate_slug_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let repo = ArticleRepository::new(db);
    repo.create(new_article(author.id, ArticleStatus::Draft), "same".to_string())
        .await?;

    let result = repo
        .create(new_article(author.id, ArticleStatus::Draft), "same".to_string())
        .await;

    assert!(result.is_err());
    let count = entity::prelude::Article::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
