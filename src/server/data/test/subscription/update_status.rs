use super::*;

/// Tests activating a pending subscription.
///
/// Expected: Ok with status active and both timestamps stored
#[tokio::test]
async fn activation_stores_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, subscription) =
        factory::helpers::create_subscription_with_dependencies(db).await?;

    let started_at = Utc::now();
    let ends_at = started_at + Duration::days(30);
    let active = SubscriptionRepository::new(db)
        .update_status(
            subscription.id,
            SubscriptionStatusChange {
                status: Some(SubscriptionStatus::Active),
                started_at: Some(started_at),
                ends_at: Some(ends_at),
                cancelled_at: None,
            },
        )
        .await?;

    assert_eq!(active.status, SubscriptionStatus::Active);
    let (started, ends) = (active.started_at.unwrap(), active.ends_at.unwrap());
    assert_eq!((ends - started).num_days(), 30);
    assert!(active.cancelled_at.is_none());

    Ok(())
}

/// Tests listing a plan's subscriptions by status.
///
/// Expected: Ok with the active subscription only
#[tokio::test]
async fn lists_by_plan_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::create_plan(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let active = SubscriptionFactory::new(db, first.id, plan.id)
        .status("active")
        .build()
        .await?;
    SubscriptionFactory::new(db, second.id, plan.id).build().await?;

    let page = SubscriptionRepository::new(db)
        .list(&ListParams::new(
            SubscriptionFilter {
                status: Some(SubscriptionStatus::Active),
                plan_id: Some(plan.id),
                user_id: None,
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, active.id);

    Ok(())
}

/// Tests updating a subscription that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SubscriptionRepository::new(db)
        .update_status(99, SubscriptionStatusChange::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
