use super::*;

/// Tests inserting more rows than fit in one chunk.
///
/// Expected: Ok with every row inserted
#[tokio::test]
async fn inserts_across_chunks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let count = IMPORT_CHUNK_SIZE * 2 + 50;
    let signups = (0..count)
        .map(|i| signup(&format!("bulk{}@example.com", i)))
        .collect();

    let inserted = SubscriberRepository::new(db).insert_batch(signups).await?;

    assert_eq!(inserted, count as u64);
    assert_eq!(
        entity::prelude::NewsletterSubscriber::find().count(db).await?,
        count as u64
    );

    Ok(())
}

/// Tests finding which addresses of a large list are already stored.
///
/// Expected: Ok with exactly the stored addresses
#[tokio::test]
async fn finds_existing_emails_across_chunks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriberFactory::new(db).email("first@example.com").build().await?;
    SubscriberFactory::new(db).email("last@example.com").build().await?;

    let mut emails = vec!["first@example.com".to_string()];
    emails.extend((0..IMPORT_CHUNK_SIZE * 2).map(|i| format!("new{}@example.com", i)));
    emails.push("last@example.com".to_string());

    let found = SubscriberRepository::new(db).existing_emails(&emails).await?;

    assert_eq!(found.len(), 2);
    assert!(found.contains("first@example.com"));
    assert!(found.contains("last@example.com"));

    Ok(())
}

/// Tests a batch containing an address that already exists.
///
/// Expected: Err from the unique constraint on email
#[tokio::test]
async fn batch_with_existing_email_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriberFactory::new(db).email("taken@example.com").build().await?;

    let result = SubscriberRepository::new(db)
        .insert_batch(vec![signup("taken@example.com")])
        .await;

    assert!(result.is_err());

    Ok(())
}
