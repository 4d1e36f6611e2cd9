use super::*;

/// Tests two sequential view increments.
///
/// Expected: Ok with the view count raised by exactly 2
#[tokio::test]
async fn sequential_increments_add_up() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let article = factory::article::ArticleFactory::new(db, author.id)
        .view_count(7)
        .build()
        .await?;
    let repo = ArticleRepository::new(db);

    assert!(repo.increment_views(article.id).await?);
    assert!(repo.increment_views(article.id).await?);

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.view_count, 9);
    assert_eq!(stored.like_count, 0);

    Ok(())
}

/// Tests concurrent like increments.
///
/// Runs many increments at once; each is a single `UPDATE` so none may be lost.
///
/// Expected: Ok with the like count equal to the number of increments
#[tokio::test]
async fn concurrent_increments_are_not_lost() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let article = factory::create_published_article(db, author.id).await?;
    let repo = ArticleRepository::new(db);

    let mut likes = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let db = db.clone();
        let id = article.id;
        likes.spawn(async move { ArticleRepository::new(&db).increment_likes(id).await });
    }
    while let Some(result) = likes.join_next().await {
        assert!(result.unwrap()?);
    }

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.like_count, 20);

    Ok(())
}

/// Tests incrementing a counter of a missing article.
///
/// Expected: Ok(false)
#[tokio::test]
async fn increment_reports_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ArticleRepository::new(db).increment_views(404).await?);

    Ok(())
}
