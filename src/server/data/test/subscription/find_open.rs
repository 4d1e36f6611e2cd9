use super::*;

/// Tests finding a member's pending or active subscription.
///
/// Expected: Ok(Some) while one is open, Ok(None) once it is cancelled
#[tokio::test]
async fn finds_open_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, subscription) =
        factory::helpers::create_subscription_with_dependencies(db).await?;
    let repo = SubscriptionRepository::new(db);

    let open = repo.find_open_for_user(member.id).await?;
    assert_eq!(open.map(|s| s.id), Some(subscription.id));

    repo.update_status(
        subscription.id,
        SubscriptionStatusChange {
            status: Some(SubscriptionStatus::Cancelled),
            cancelled_at: Some(Utc::now()),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.find_open_for_user(member.id).await?.is_none());

    Ok(())
}

/// Tests that closed subscriptions are ignored.
///
/// Expected: Ok(None) when the member only has expired subscriptions
#[tokio::test]
async fn ignores_expired_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let plan = factory::create_plan(db).await?;
    SubscriptionFactory::new(db, member.id, plan.id)
        .status("expired")
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    assert!(repo.find_open_for_user(member.id).await?.is_none());

    Ok(())
}
