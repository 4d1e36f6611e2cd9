use super::*;

/// Tests that downloads are counted one by one.
///
/// Expected: Ok with the download count raised by 2
#[tokio::test]
async fn counts_each_download() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let publication = factory::create_publication(db, author.id).await?;
    let repo = PublicationRepository::new(db);

    assert!(repo.increment_downloads(publication.id).await?);
    assert!(repo.increment_downloads(publication.id).await?);

    let stored = repo.find_by_id(publication.id).await?.unwrap();
    assert_eq!(stored.download_count, 2);

    Ok(())
}
