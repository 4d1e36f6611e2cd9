use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginatedDto, StatusChangeDto},
        contact::{ContactDto, ContactListQueryDto, ContactStatus, CreateContactDto, ReplyContactDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::contact::{reply_text, ContactFilter, ContactSubmission, CreateContactParams},
        query::ListParams,
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact form endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Submit the public contact form.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The stored submission
/// - `400 Bad Request` - Missing name or message, or malformed email
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Submission received", body = ContactDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateContactParams::from_dto(payload)?;

    let submission = ContactService::new(&state.db).submit(params).await?;

    Ok((StatusCode::CREATED, Json(submission.into_dto())))
}

/// List contact submissions.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = CONTACT_TAG,
    params(ContactListQueryDto),
    responses(
        (status = 200, description = "Page of submissions", body = PaginatedDto<ContactDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ContactListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ListParams::new(
        ContactFilter::from_dto(&query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    );
    let page = ContactService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(ContactSubmission::into_dto))))
}

/// Open a contact submission.
///
/// Opening a `new` submission marks it as `read`.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    responses(
        (status = 200, description = "The submission", body = ContactDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let submission = ContactService::new(&state.db).open(id).await?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}/status",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    request_body = StatusChangeDto<ContactStatus>,
    responses(
        (status = 200, description = "Status changed", body = ContactDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contact_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusChangeDto<ContactStatus>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let submission = ContactService::new(&state.db)
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}

/// Record a reply to a contact submission.
///
/// The acting admin is stored as the replier and the submission moves to `replied`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The replied submission
/// - `400 Bad Request` - Empty reply
/// - `404 Not Found` - No submission with that id
/// - `409 Conflict` - Submission is archived
#[utoipa::path(
    post,
    path = "/api/admin/contacts/{id}/reply",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    request_body = ReplyContactDto,
    responses(
        (status = 200, description = "Reply recorded", body = ContactDto),
        (status = 400, description = "Empty reply", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reply_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReplyContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reply = reply_text(&payload.reply)?;
    let submission = ContactService::new(&state.db)
        .reply(id, admin.id, reply)
        .await?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ContactService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Contact submission deleted"))))
}
