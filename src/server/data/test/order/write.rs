use super::*;

/// Tests storing a guest checkout.
///
/// Expected: Ok with a pending order and no buyer id
#[tokio::test]
async fn creates_guest_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BookOrder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: None,
            customer_name: "Meron".to_string(),
            customer_email: "meron@example.org".to_string(),
            item_title: "Collected Speeches".to_string(),
            quantity: 2,
            unit_price_cents: 45_000,
            total_cents: 90_000,
            currency: "ETB".to_string(),
            shipping_address: "Bole, Addis Ababa".to_string(),
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.user_id.is_none());
    assert!(order.paid_at.is_none());
    assert_eq!(order.total_cents, 90_000);

    Ok(())
}

/// Tests moving an order to paid and then shipped.
///
/// Verifies that `paid_at` is written with the paid status and kept afterwards.
///
/// Expected: Ok with `paid_at` set on both results
#[tokio::test]
async fn paid_at_survives_later_status_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BookOrder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;
    let repo = OrderRepository::new(db);

    let paid = repo
        .set_status(order.id, OrderStatus::Paid, Some(Utc::now()))
        .await?;
    assert_eq!(paid.status, OrderStatus::Paid);
    assert!(paid.paid_at.is_some());

    let shipped = repo.set_status(order.id, OrderStatus::Shipped, None).await?;
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert_eq!(shipped.paid_at, paid.paid_at);

    Ok(())
}
