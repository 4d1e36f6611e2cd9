use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginatedDto},
        plan::{CreatePlanDto, PlanDto, PlanListQueryDto, UpdatePlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plan::{CreatePlanParams, Plan, PlanFilter, PlanSortBy, UpdatePlanParams},
        query::ListParams,
        service::plan::PlanService,
        state::AppState,
    },
};

/// Tag for grouping subscription plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plan";

fn list_params(query: &PlanListQueryDto) -> Result<ListParams<PlanFilter, PlanSortBy>, AppError> {
    Ok(ListParams::new(
        PlanFilter::from_dto(query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    ))
}

/// List plans open for subscription.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    params(PlanListQueryDto),
    responses(
        (status = 200, description = "Page of active plans", body = PaginatedDto<PlanDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_plans(
    State(state): State<AppState>,
    Query(query): Query<PlanListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = list_params(&query)?;

    let page = PlanService::new(&state.db).list_active(params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Plan::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/plans",
    tag = PLAN_TAG,
    params(PlanListQueryDto),
    responses(
        (status = 200, description = "Page of plans", body = PaginatedDto<PlanDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PlanListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = list_params(&query)?;
    let page = PlanService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Plan::into_dto))))
}

/// Create a subscription plan.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The created plan
/// - `400 Bad Request` - Invalid price or name
/// - `409 Conflict` - Slug already used
#[utoipa::path(
    post,
    path = "/api/admin/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreatePlanParams::from_dto(payload)?;
    let plan = PlanService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/plans/{id}",
    tag = PLAN_TAG,
    params(("id" = i32, Path, description = "Plan id")),
    responses(
        (status = 200, description = "The plan", body = PlanDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = PlanService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/plans/{id}",
    tag = PLAN_TAG,
    params(("id" = i32, Path, description = "Plan id")),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdatePlanParams::from_dto(id, payload)?;
    let plan = PlanService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete a plan.
///
/// Plans that were ever subscribed to cannot be deleted; deactivate them instead.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Plan deleted
/// - `404 Not Found` - No plan with that id
/// - `409 Conflict` - Subscriptions reference the plan
#[utoipa::path(
    delete,
    path = "/api/admin/plans/{id}",
    tag = PLAN_TAG,
    params(("id" = i32, Path, description = "Plan id")),
    responses(
        (status = 200, description = "Plan deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 409, description = "Plan has subscriptions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PlanService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Plan deleted"))))
}
