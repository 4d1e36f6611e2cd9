use super::*;

/// Tests filtering subscribers by status and locale.
///
/// Expected: Ok with the subscribed Amharic reader only
#[tokio::test]
async fn filters_by_status_and_locale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = SubscriberFactory::new(db).locale("am").build().await?;
    SubscriberFactory::new(db)
        .locale("am")
        .status("unsubscribed")
        .build()
        .await?;
    factory::create_subscriber(db).await?;

    let page = SubscriberRepository::new(db)
        .list(&ListParams::new(
            SubscriberFilter {
                status: Some(SubscriberStatus::Subscribed),
                locale: Some(Locale::Am),
                search: None,
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, wanted.id);
    assert_eq!(page.items[0].locale, Locale::Am);

    Ok(())
}

/// Tests looking a subscriber up by email.
///
/// Expected: Ok(Some) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscriber = SubscriberFactory::new(db)
        .email("hana@example.com")
        .build()
        .await?;
    let repo = SubscriberRepository::new(db);

    let found = repo.find_by_email("hana@example.com").await?;
    assert_eq!(found.map(|s| s.id), Some(subscriber.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
