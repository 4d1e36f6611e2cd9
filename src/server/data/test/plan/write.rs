use super::*;

/// Tests creating a plan and then patching part of it.
///
/// Expected: Ok with only the patched fields changed
#[tokio::test]
async fn creates_then_patches_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    let plan = repo
        .create(
            CreatePlanParams {
                slug: None,
                name: "Reader".to_string(),
                name_am: Some("አንባቢ".to_string()),
                name_or: None,
                description: Some("Monthly access".to_string()),
                price_cents: 30_000,
                currency: "ETB".to_string(),
                interval: PlanInterval::Monthly,
                is_active: true,
            },
            "reader".to_string(),
        )
        .await?;
    assert_eq!(plan.slug, "reader");
    let plans = ResourceRepository::<PlanResource>::new(db);
    assert!(plans.slug_taken("reader", None).await?);
    assert!(!plans.slug_taken("reader", Some(plan.id)).await?);

    let updated = repo
        .update(UpdatePlanParams {
            id: plan.id,
            price_cents: Some(35_000),
            description: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.price_cents, 35_000);
    assert!(updated.description.is_none());
    assert_eq!(updated.name, "Reader");
    assert_eq!(updated.name_am.as_deref(), Some("አንባቢ"));

    Ok(())
}
