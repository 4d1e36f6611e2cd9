use super::*;

fn count_of(counts: &[(&'static str, u64)], status: &str) -> u64 {
    counts
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, c)| *c)
        .unwrap_or_default()
}

/// Tests the dashboard on an empty database.
///
/// Expected: Ok with every figure zero and every status listed
#[tokio::test]
async fn empty_database_gives_zeroes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = StatsRepository::new(db).dashboard().await?;

    assert_eq!(stats.articles_total(), 0);
    assert_eq!(stats.orders_total(), 0);
    assert_eq!(stats.revenue_cents, 0);
    assert_eq!(stats.articles_by_status.len(), 4);
    assert_eq!(stats.orders_by_status.len(), 6);

    Ok(())
}

/// Tests every dashboard figure against seeded rows.
///
/// Expected: Ok with counts per resource and revenue from paid, shipped and delivered
/// orders only
#[tokio::test]
async fn counts_every_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let editor = factory::create_editor(db).await?;
    ArticleFactory::new(db, editor.id).status("published").build().await?;
    ArticleFactory::new(db, editor.id).status("published").build().await?;
    ArticleFactory::new(db, editor.id).build().await?;
    PublicationFactory::new(db, editor.id).status("published").build().await?;
    factory::create_publication(db, editor.id).await?;

    factory::create_contact(db).await?;
    ContactFactory::new(db).status("replied").build().await?;

    factory::create_subscriber(db).await?;
    SubscriberFactory::new(db).status("unsubscribed").build().await?;

    let plan = factory::create_plan(db).await?;
    let member = factory::create_user(db).await?;
    SubscriptionFactory::new(db, member.id, plan.id)
        .status("active")
        .build()
        .await?;

    OrderFactory::new(db).status("paid").build().await?;
    OrderFactory::new(db).status("delivered").quantity(2).build().await?;
    OrderFactory::new(db).status("refunded").build().await?;
    factory::create_order(db).await?;

    let stats = StatsRepository::new(db).dashboard().await?;

    assert_eq!(stats.articles_total(), 3);
    assert_eq!(count_of(&stats.articles_by_status, "published"), 2);
    assert_eq!(count_of(&stats.articles_by_status, "draft"), 1);
    assert_eq!(stats.publications_total, 2);
    assert_eq!(stats.publications_published, 1);
    assert_eq!(stats.new_contacts, 1);
    assert_eq!(stats.active_subscribers, 1);
    assert_eq!(stats.active_subscriptions, 1);
    assert_eq!(stats.orders_total(), 4);
    assert_eq!(count_of(&stats.orders_by_status, "pending"), 1);
    assert_eq!(stats.revenue_cents, 25_000 + 50_000);

    Ok(())
}
