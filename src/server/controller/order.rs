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
        order::{CreateOrderDto, OrderDto, OrderListQueryDto, OrderStatus},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{CreateOrderParams, Order, OrderFilter, OrderSortBy},
        query::ListParams,
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping book order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

fn list_params(
    query: &OrderListQueryDto,
) -> Result<ListParams<OrderFilter, OrderSortBy>, AppError> {
    Ok(ListParams::new(
        OrderFilter::from_dto(query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    ))
}

/// Place a book order.
///
/// Guests may order; a logged in member is recorded as the buyer. The total is computed
/// on the server from quantity and unit price.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The pending order
/// - `400 Bad Request` - Quantity outside 1..=100, non-positive price, or total overflow
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).current().await?;

    let params = CreateOrderParams::from_dto(member.map(|m| m.id), payload)?;
    let order = OrderService::new(&state.db).place(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/orders/mine",
    tag = ORDER_TAG,
    params(OrderListQueryDto),
    responses(
        (status = 200, description = "Page of the member's orders", body = PaginatedDto<OrderDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = list_params(&query)?;
    let page = OrderService::new(&state.db)
        .list_for_user(member.id, params)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Order::into_dto))))
}

/// List book orders.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ORDER_TAG,
    params(OrderListQueryDto),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedDto<OrderDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = list_params(&query)?;
    let page = OrderService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Order::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order = OrderService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Move an order through fulfilment.
///
/// The first move to `paid` records the payment time.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The order in its new status
/// - `404 Not Found` - No order with that id
/// - `409 Conflict` - Transition not allowed from the current status
#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    request_body = StatusChangeDto<OrderStatus>,
    responses(
        (status = 200, description = "Status changed", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusChangeDto<OrderStatus>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order = OrderService::new(&state.db)
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
