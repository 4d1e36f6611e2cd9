use super::*;

/// Tests listing one member's orders by status.
///
/// Expected: Ok with the member's paid order only
#[tokio::test]
async fn filters_by_member_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BookOrder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let paid = OrderFactory::new(db)
        .user_id(member.id)
        .status("paid")
        .build()
        .await?;
    OrderFactory::new(db).user_id(member.id).build().await?;
    OrderFactory::new(db).status("paid").build().await?;

    let page = OrderRepository::new(db)
        .list(&ListParams::new(
            OrderFilter {
                status: Some(OrderStatus::Paid),
                user_id: Some(member.id),
                search: None,
            },
            None,
            None,
            None,
            None,
        ))
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, paid.id);

    Ok(())
}

/// Tests searching orders by item title and sorting by total.
///
/// Expected: Ok with matching orders, largest total first
#[tokio::test]
async fn searches_item_title_sorted_by_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BookOrder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let single = OrderFactory::new(db)
        .item_title("Collected Speeches")
        .build()
        .await?;
    let triple = OrderFactory::new(db)
        .item_title("Collected Speeches")
        .quantity(3)
        .build()
        .await?;
    OrderFactory::new(db).item_title("Memoir").build().await?;

    let page = OrderRepository::new(db)
        .list(&ListParams::new(
            OrderFilter {
                search: Some("speeches".to_string()),
                ..Default::default()
            },
            Some("total"),
            Some("desc"),
            None,
            None,
        ))
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![triple.id, single.id]);
    assert_eq!(page.items[0].total_cents, 75_000);

    Ok(())
}
