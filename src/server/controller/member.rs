use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        member::{MemberDto, MemberListQueryDto, RoleDto, UpdateMemberDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::member::{Member, MemberFilter, RoleSummary, UpdateMemberParams},
        query::ListParams,
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member administration endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List registered members.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Page of members
/// - `400 Bad Request` - Unknown role filter
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
#[utoipa::path(
    get,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    params(MemberListQueryDto),
    responses(
        (status = 200, description = "Page of members", body = PaginatedDto<MemberDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MemberListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ListParams::new(
        MemberFilter::from_dto(&query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    );
    let page = MemberService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Member::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "The member", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let member = MemberService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Change a member's role or active flag.
///
/// An admin cannot demote or deactivate their own account.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Member to change
/// - `payload` - New role and/or active flag
///
/// # Returns
/// - `200 OK` - The updated member
/// - `400 Bad Request` - Self demotion or self deactivation
/// - `404 Not Found` - No member with that id
#[utoipa::path(
    put,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member id")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Admins cannot demote or deactivate themselves", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateMemberParams::from_dto(id, payload);
    let member = MemberService::new(&state.db).update(admin.id, params).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// List the fixed roles, what each grants and how many members hold it.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/roles",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Every role", body = Vec<RoleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let roles = MemberService::new(&state.db).roles().await?;
    let roles: Vec<RoleDto> = roles.into_iter().map(RoleSummary::into_dto).collect();

    Ok((StatusCode::OK, Json(roles)))
}
