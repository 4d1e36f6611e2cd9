use super::*;

/// Tests detecting subscriptions that reference a plan.
///
/// Expected: Ok(true) for the subscribed plan, Ok(false) for an unused one
#[tokio::test]
async fn reports_referencing_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, used, _) = factory::helpers::create_subscription_with_dependencies(db).await?;
    let unused = factory::create_plan(db).await?;
    let repo = PlanRepository::new(db);

    assert!(repo.has_subscriptions(used.id).await?);
    assert!(!repo.has_subscriptions(unused.id).await?);

    assert!(repo.delete(unused.id).await?);
    assert!(repo.find_by_id(unused.id).await?.is_none());

    Ok(())
}
