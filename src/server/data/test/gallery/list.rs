use super::*;

/// Tests the kind, featured and tag filters together.
///
/// Expected: Ok with only the featured video tagged "adwa"
#[tokio::test]
async fn filters_by_kind_featured_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let expected = GalleryItemFactory::new(db, author.id)
        .kind("video")
        .featured(true)
        .tags(&["adwa", "history"])
        .build()
        .await?;
    GalleryItemFactory::new(db, author.id)
        .kind("video")
        .tags(&["adwa"])
        .build()
        .await?;
    GalleryItemFactory::new(db, author.id)
        .featured(true)
        .tags(&["adwa"])
        .build()
        .await?;
    GalleryItemFactory::new(db, author.id)
        .kind("video")
        .featured(true)
        .tags(&["launch"])
        .build()
        .await?;

    let page = GalleryRepository::new(db)
        .list(&ListParams::new(
            GalleryFilter {
                kind: Some(GalleryKind::Video),
                featured: Some(true),
                tags: Some(vec!["adwa".to_string()]),
                ..Default::default()
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, expected.id);
    assert_eq!(page.items[0].tags, vec!["adwa", "history"]);

    Ok(())
}

/// Tests ordering by manual position with the default page size.
///
/// Expected: Ok with positions ascending and a limit of 24
#[tokio::test]
async fn sorts_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    for position in [3, 1, 2] {
        GalleryItemFactory::new(db, author.id)
            .position(position)
            .build()
            .await?;
    }

    let page = GalleryRepository::new(db)
        .list(&ListParams::new(
            GalleryFilter::default(),
            Some("position"),
            Some("asc"),
            None,
            None,
        ))
        .await?;
    let positions: Vec<i32> = page.items.iter().map(|g| g.position).collect();

    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(page.meta.limit, 24);

    Ok(())
}

/// Tests that search covers captions.
///
/// Expected: Ok with the item whose caption mentions the search term
#[tokio::test]
async fn searches_caption() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let matching = GalleryItemFactory::new(db, author.id)
        .caption("Signing copies at the Addis book fair")
        .build()
        .await?;
    factory::create_gallery_item(db, author.id).await?;

    let page = GalleryRepository::new(db)
        .list(&ListParams::new(
            GalleryFilter {
                search: Some("BOOK FAIR".to_string()),
                ..Default::default()
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, matching.id);

    Ok(())
}
