use crate::{
    model::plan::PlanInterval,
    server::{
        error::AppError,
        model::plan::{CreatePlanParams, PlanFilter},
        query::ListParams,
        service::plan::PlanService,
    },
};
use test_utils::{builder::TestBuilder, factory, factory::plan::PlanFactory};

fn plan(name: &str, slug: Option<&str>) -> CreatePlanParams {
    CreatePlanParams {
        slug: slug.map(str::to_string),
        name: name.to_string(),
        name_am: None,
        name_or: None,
        description: None,
        price_cents: 20_000,
        currency: "ETB".to_string(),
        interval: PlanInterval::Monthly,
        is_active: true,
    }
}

/// Tests creating plans with generated and explicit slugs.
///
/// Expected: Ok with a numbered generated slug, Err(AppError::Conflict) for a taken one
#[tokio::test]
async fn create_resolves_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlanService::new(db);

    let first = service.create(plan("Reader Plus", None)).await?;
    let second = service.create(plan("Reader Plus", None)).await?;
    assert_eq!(first.slug, "reader-plus");
    assert_eq!(second.slug, "reader-plus-2");

    let taken = service.create(plan("Other", Some("reader-plus"))).await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a plan that members subscribed to.
///
/// Expected: Err(AppError::Conflict), while an unused plan is deleted
#[tokio::test]
async fn delete_refuses_subscribed_plan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, used, _) = factory::helpers::create_subscription_with_dependencies(db).await?;
    let unused = factory::create_plan(db).await?;
    let service = PlanService::new(db);

    assert!(matches!(
        service.delete(used.id).await,
        Err(AppError::Conflict(_))
    ));

    service.delete(unused.id).await?;
    assert!(matches!(
        service.get_by_id(unused.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the public plan listing.
///
/// Expected: Ok with inactive plans left out even when asked for
#[tokio::test]
async fn public_listing_shows_active_plans_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_plan(db).await?;
    PlanFactory::new(db).active(false).build().await?;

    let page = PlanService::new(db)
        .list_active(ListParams::new(
            PlanFilter {
                is_active: Some(false),
                ..Default::default()
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
