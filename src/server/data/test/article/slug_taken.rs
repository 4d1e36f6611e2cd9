use super::*;

/// Tests slug lookups with and without an excluded id.
///
/// An article's own slug does not count as taken when that article is excluded, which
/// is how updates that keep their slug are allowed.
///
/// Expected: Ok with taken/free answers for each case
#[tokio::test]
async fn reports_taken_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let article = factory::article::ArticleFactory::new(db, author.id)
        .slug("on-justice")
        .build()
        .await?;
    let repo = ResourceRepository::<ArticleResource>::new(db);

    assert!(repo.slug_taken("on-justice", None).await?);
    assert!(!repo.slug_taken("on-justice", Some(article.id)).await?);
    assert!(repo.slug_taken("on-justice", Some(article.id + 1)).await?);
    assert!(!repo.slug_taken("elsewhere", None).await?);

    Ok(())
}
