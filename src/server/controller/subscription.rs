use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, StatusChangeDto},
        subscription::{
            CreateSubscriptionDto, SubscriptionDto, SubscriptionListQueryDto, SubscriptionStatus,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::subscription::{Subscription, SubscriptionFilter, SubscriptionSortBy},
        query::ListParams,
        service::subscription::SubscriptionService,
        state::AppState,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

fn list_params(
    query: &SubscriptionListQueryDto,
) -> Result<ListParams<SubscriptionFilter, SubscriptionSortBy>, AppError> {
    Ok(ListParams::new(
        SubscriptionFilter::from_dto(query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    ))
}

/// Subscribe the logged in member to a plan.
///
/// The subscription starts out `pending` until an admin activates it.
///
/// # Access Control
/// - Any logged in, active member
///
/// # Returns
/// - `201 Created` - The pending subscription
/// - `400 Bad Request` - The plan is not open for subscription
/// - `404 Not Found` - No plan with that id
/// - `409 Conflict` - The member already holds a pending or active subscription
#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = SUBSCRIPTION_TAG,
    request_body = CreateSubscriptionDto,
    responses(
        (status = 201, description = "Subscription created", body = SubscriptionDto),
        (status = 400, description = "Plan is inactive", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 409, description = "Open subscription exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subscription(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let subscription = SubscriptionService::new(&state.db)
        .subscribe(member.id, payload.plan_id)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

/// List the logged in member's subscriptions.
///
/// A `userId` in the query is ignored.
#[utoipa::path(
    get,
    path = "/api/subscriptions/mine",
    tag = SUBSCRIPTION_TAG,
    params(SubscriptionListQueryDto),
    responses(
        (status = 200, description = "Page of the member's subscriptions", body = PaginatedDto<SubscriptionDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SubscriptionListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = list_params(&query)?;
    let page = SubscriptionService::new(&state.db)
        .list_for_user(member.id, params)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Subscription::into_dto))))
}

/// Cancel one of the logged in member's subscriptions.
///
/// # Access Control
/// - The member holding the subscription
///
/// # Returns
/// - `200 OK` - The cancelled subscription
/// - `403 Forbidden` - The subscription belongs to someone else
/// - `404 Not Found` - No subscription with that id
/// - `409 Conflict` - Already cancelled or expired
#[utoipa::path(
    post,
    path = "/api/subscriptions/{id}/cancel",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Subscription id")),
    responses(
        (status = 200, description = "Subscription cancelled", body = SubscriptionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the subscription holder", body = ErrorDto),
        (status = 404, description = "Subscription not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let subscription = SubscriptionService::new(&state.db)
        .cancel(member.id, id)
        .await?;

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/subscriptions",
    tag = SUBSCRIPTION_TAG,
    params(SubscriptionListQueryDto),
    responses(
        (status = 200, description = "Page of subscriptions", body = PaginatedDto<SubscriptionDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SubscriptionListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = list_params(&query)?;
    let page = SubscriptionService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Subscription::into_dto))))
}

/// Move a subscription through its lifecycle.
///
/// Activation starts the billing period at the current time.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/subscriptions/{id}/status",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Subscription id")),
    request_body = StatusChangeDto<SubscriptionStatus>,
    responses(
        (status = 200, description = "Status changed", body = SubscriptionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Subscription not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subscription_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusChangeDto<SubscriptionStatus>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let subscription = SubscriptionService::new(&state.db)
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}
