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
        newsletter::{
            ImportResultDto, SubscribeDto, SubscriberDto, SubscriberListQueryDto, UnsubscribeDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::newsletter::{SubscribeParams, Subscriber, SubscriberFilter},
        query::ListParams,
        service::newsletter::{NewsletterService, Signup},
        state::AppState,
    },
};

/// Tag for grouping newsletter endpoints in OpenAPI documentation
pub static NEWSLETTER_TAG: &str = "newsletter";

/// Subscribe to the newsletter.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - New subscriber
/// - `200 OK` - A previously unsubscribed address was reactivated
/// - `400 Bad Request` - Malformed email
/// - `409 Conflict` - The address is already subscribed
#[utoipa::path(
    post,
    path = "/api/newsletter/subscribe",
    tag = NEWSLETTER_TAG,
    request_body = SubscribeDto,
    responses(
        (status = 201, description = "Subscribed", body = SubscriberDto),
        (status = 200, description = "Resubscribed", body = SubscriberDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 409, description = "Already subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SubscribeParams::from_dto(payload)?;

    let (status, subscriber) = match NewsletterService::new(&state.db).subscribe(params).await? {
        Signup::Created(subscriber) => (StatusCode::CREATED, subscriber),
        Signup::Resubscribed(subscriber) => (StatusCode::OK, subscriber),
    };

    Ok((status, Json(subscriber.into_dto())))
}

/// Unsubscribe an email address.
///
/// Repeating the request for an unsubscribed address succeeds without changes.
#[utoipa::path(
    post,
    path = "/api/newsletter/unsubscribe",
    tag = NEWSLETTER_TAG,
    request_body = UnsubscribeDto,
    responses(
        (status = 200, description = "Unsubscribed", body = SubscriberDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(payload): Json<UnsubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let subscriber = NewsletterService::new(&state.db)
        .unsubscribe(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(subscriber.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/newsletter",
    tag = NEWSLETTER_TAG,
    params(SubscriberListQueryDto),
    responses(
        (status = 200, description = "Page of subscribers", body = PaginatedDto<SubscriberDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscribers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SubscriberListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ListParams::new(
        SubscriberFilter::from_dto(&query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    );
    let page = NewsletterService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Subscriber::into_dto))))
}

#[utoipa::path(
    delete,
    path = "/api/admin/newsletter/{id}",
    tag = NEWSLETTER_TAG,
    params(("id" = i32, Path, description = "Subscriber id")),
    responses(
        (status = 200, description = "Subscriber deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Subscriber not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subscriber(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    NewsletterService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Subscriber deleted"))))
}

/// Import subscribers from a CSV upload.
///
/// The body is the raw CSV text. A header row naming an `email` column is required;
/// `name` and `locale` columns are optional.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `body` - CSV file contents
///
/// # Returns
/// - `200 OK` - Imported and skipped counts plus the rejected rows
/// - `400 Bad Request` - Malformed CSV or no `email` column
#[utoipa::path(
    post,
    path = "/api/admin/newsletter/import",
    tag = NEWSLETTER_TAG,
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import finished", body = ImportResultDto),
        (status = 400, description = "Malformed CSV", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_subscribers(
    State(state): State<AppState>,
    session: Session,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = NewsletterService::new(&state.db).import_csv(&body).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
