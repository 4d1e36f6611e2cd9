use super::*;

/// Tests listing active plans cheapest first.
///
/// Expected: Ok with the active plans ordered by price ascending
#[tokio::test]
async fn lists_active_plans_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let yearly = PlanFactory::new(db)
        .price_cents(500_000)
        .interval("yearly")
        .build()
        .await?;
    let monthly = PlanFactory::new(db).price_cents(50_000).build().await?;
    PlanFactory::new(db).price_cents(10_000).active(false).build().await?;

    let page = PlanRepository::new(db)
        .list(&ListParams::new(
            PlanFilter {
                is_active: Some(true),
                ..Default::default()
            },
            Some("price"),
            Some("asc"),
            None,
            None,
        ))
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![monthly.id, yearly.id]);
    assert_eq!(page.items[1].interval, PlanInterval::Yearly);

    Ok(())
}
