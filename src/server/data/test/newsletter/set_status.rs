use super::*;

/// Tests unsubscribing and then resubscribing with a new signup.
///
/// Verifies that `unsubscribed_at` is stamped then cleared, and that the resubscribe takes
/// the new name and locale.
///
/// Expected: Ok with a subscribed row carrying the new details
#[tokio::test]
async fn resubscribe_clears_unsubscribed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterSubscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscriber = factory::create_subscriber(db).await?;
    let repo = SubscriberRepository::new(db);

    let left = repo
        .set_status(subscriber.id, SubscriberStatus::Unsubscribed, None)
        .await?;
    assert_eq!(left.status, SubscriberStatus::Unsubscribed);
    assert!(left.unsubscribed_at.is_some());

    let back = repo
        .set_status(
            subscriber.id,
            SubscriberStatus::Subscribed,
            Some(SubscribeParams {
                email: subscriber.email.clone(),
                name: Some("Hana".to_string()),
                locale: Locale::Or,
                source: None,
            }),
        )
        .await?;
    assert_eq!(back.status, SubscriberStatus::Subscribed);
    assert!(back.unsubscribed_at.is_none());
    assert_eq!(back.name.as_deref(), Some("Hana"));
    assert_eq!(back.locale, Locale::Or);
    assert!(back.subscribed_at >= left.subscribed_at);

    Ok(())
}
