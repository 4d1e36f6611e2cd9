use super::*;

/// Tests a partial update of a publication.
///
/// Expected: Ok with the new year and cleared file URL, other fields untouched
#[tokio::test]
async fn updates_year_and_clears_file() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let existing = PublicationFactory::new(db, author.id)
        .title("Collected Speeches")
        .tags(&["speech"])
        .build()
        .await?;

    let updated = PublicationRepository::new(db)
        .update(UpdatePublicationParams {
            id: existing.id,
            published_year: Some(1994),
            file_url: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.title, "Collected Speeches");
    assert_eq!(updated.published_year, Some(1994));
    assert!(updated.file_url.is_none());
    assert_eq!(updated.tags, vec!["speech".to_string()]);

    Ok(())
}

/// Tests publishing through `set_status`.
///
/// Expected: Ok with the publication published and stamped
#[tokio::test]
async fn publishes_with_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let existing = factory::create_publication(db, author.id).await?;

    let published = PublicationRepository::new(db)
        .set_status(
            existing.id,
            PublicationStatus::Published,
            Some(chrono::Utc::now()),
        )
        .await?;

    assert_eq!(published.status, PublicationStatus::Published);
    assert!(published.published_at.is_some());

    Ok(())
}
