use super::*;

/// Tests the default page size and the free/status filters.
///
/// Expected: Ok with only free, published publications and a page size of 12
#[tokio::test]
async fn filters_free_published_publications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    for _ in 0..14 {
        PublicationFactory::new(db, author.id)
            .status("published")
            .build()
            .await?;
    }
    PublicationFactory::new(db, author.id)
        .status("published")
        .free(false)
        .build()
        .await?;
    factory::create_publication(db, author.id).await?;

    let page = PublicationRepository::new(db)
        .list(&ListParams::new(
            PublicationFilter {
                status: Some(PublicationStatus::Published),
                is_free: Some(true),
                ..Default::default()
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 14);
    assert_eq!(page.meta.limit, 12);
    assert_eq!(page.items.len(), 12);
    assert!(page
        .items
        .iter()
        .all(|p| p.is_free && p.status == PublicationStatus::Published));

    Ok(())
}

/// Tests that search covers the publisher column.
///
/// Expected: Ok with the publication printed by the matching publisher
#[tokio::test]
async fn searches_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let printed = PublicationFactory::new(db, author.id)
        .publisher("Addis Press")
        .build()
        .await?;
    factory::create_publication(db, author.id).await?;

    let page = PublicationRepository::new(db)
        .list(&ListParams::new(
            PublicationFilter {
                search: Some("addis".to_string()),
                ..Default::default()
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, printed.id);

    Ok(())
}

/// Tests sorting by publication year and filtering by kind.
///
/// Expected: Ok with speeches ordered from oldest to newest
#[tokio::test]
async fn sorts_speeches_by_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    for year in [2015, 1991, 2005] {
        PublicationFactory::new(db, author.id)
            .kind("speech")
            .published_year(year)
            .build()
            .await?;
    }
    PublicationFactory::new(db, author.id)
        .kind("book")
        .published_year(1980)
        .build()
        .await?;

    let page = PublicationRepository::new(db)
        .list(&ListParams::new(
            PublicationFilter {
                kind: Some(PublicationKind::Speech),
                ..Default::default()
            },
            Some("publishedYear"),
            Some("asc"),
            None,
            None,
        ))
        .await?;

    let years: Vec<Option<i32>> = page.items.iter().map(|p| p.published_year).collect();
    assert_eq!(years, vec![Some(1991), Some(2005), Some(2015)]);

    Ok(())
}
