use crate::{
    model::order::OrderStatus,
    server::{
        error::AppError,
        model::order::{CreateOrderParams, OrderFilter},
        query::ListParams,
        service::order::OrderService,
    },
};
use test_utils::{builder::TestBuilder, factory, factory::order::OrderFactory};

/// Tests paying for an order and shipping it.
///
/// Expected: Ok with `paid_at` stamped once and kept when shipped
#[tokio::test]
async fn payment_stamps_paid_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BookOrder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;
    let service = OrderService::new(db);

    let paid = service.set_status(order.id, OrderStatus::Paid).await?;
    assert!(paid.paid_at.is_some());

    let shipped = service.set_status(order.id, OrderStatus::Shipped).await?;
    assert_eq!(shipped.paid_at, paid.paid_at);

    let cancelled = service.set_status(order.id, OrderStatus::Cancelled).await;
    assert!(matches!(cancelled, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests placing a member order and listing only that member's orders.
///
/// Expected: Ok with the member's order alone, whatever filter the member asks for
#[tokio::test]
async fn members_see_their_own_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BookOrder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    OrderFactory::new(db).user_id(other.id).build().await?;
    let service = OrderService::new(db);

    let placed = service
        .place(CreateOrderParams {
            user_id: Some(member.id),
            customer_name: "Meron".to_string(),
            customer_email: "meron@example.org".to_string(),
            item_title: "Collected Speeches".to_string(),
            quantity: 1,
            unit_price_cents: 45_000,
            total_cents: 45_000,
            currency: "ETB".to_string(),
            shipping_address: "Bole, Addis Ababa".to_string(),
        })
        .await?;

    let page = service
        .list_for_user(
            member.id,
            ListParams::new(
                OrderFilter {
                    user_id: Some(other.id),
                    ..Default::default()
                },
                None,
                None,
                None,
                None,
            ),
        )
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, placed.id);

    Ok(())
}
