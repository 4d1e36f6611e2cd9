use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        member::MemberDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        state::AppState,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the member of the current session.
///
/// # Access Control
/// - Any logged in, active member
///
/// # Returns
/// - `200 OK` - The logged in member
/// - `401 Unauthorized` - No member in session, or the member no longer exists
/// - `403 Forbidden` - The account was deactivated
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current member", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Log out by clearing the session.
///
/// Succeeds for anonymous sessions as well.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}
