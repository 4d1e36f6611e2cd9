use super::*;

/// Tests creating an item already published and then patching it.
///
/// Expected: Ok with `published_at` stamped, the caption cleared and tags replaced
#[tokio::test]
async fn creates_then_patches_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let repo = GalleryRepository::new(db);

    let item = repo
        .create(CreateGalleryItemParams {
            author_id: author.id,
            title: "Book launch".to_string(),
            title_am: None,
            title_or: None,
            caption: Some("Launch evening".to_string()),
            caption_am: None,
            caption_or: None,
            kind: GalleryKind::Photo,
            media_url: "https://media.example.com/launch.jpg".to_string(),
            thumbnail_url: None,
            featured: false,
            position: 5,
            status: GalleryStatus::Published,
            tags: vec!["launch".to_string()],
        })
        .await?;
    assert!(item.published_at.is_some());
    assert_eq!(item.tags, vec!["launch"]);

    let updated = repo
        .update(UpdateGalleryItemParams {
            id: item.id,
            caption: Some(None),
            featured: Some(true),
            tags: Some(vec!["books".to_string()]),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.title, "Book launch");
    assert_eq!(updated.caption, None);
    assert!(updated.featured);
    assert_eq!(updated.position, 5);
    assert_eq!(updated.tags, vec!["books"]);

    Ok(())
}

/// Tests deleting an item together with its tags.
///
/// Expected: Ok(true) then Ok(false), and no tag rows left behind
#[tokio::test]
async fn delete_removes_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_editor(db).await?;
    let item = GalleryItemFactory::new(db, author.id)
        .tags(&["adwa", "history"])
        .build()
        .await?;
    let repo = GalleryRepository::new(db);

    assert!(repo.delete(item.id).await?);
    assert!(!repo.delete(item.id).await?);
    assert_eq!(entity::prelude::ContentTag::find().count(db).await?, 0);

    Ok(())
}
