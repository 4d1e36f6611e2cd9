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
        publication::{
            CreatePublicationDto, DownloadDto, PublicationDto, PublicationListQueryDto,
            PublicationStatus, UpdatePublicationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::publication::{
            CreatePublicationParams, Publication, PublicationFilter, PublicationSortBy,
            UpdatePublicationParams,
        },
        query::ListParams,
        service::publication::PublicationService,
        state::AppState,
    },
};

/// Tag for grouping publication endpoints in OpenAPI documentation
pub static PUBLICATION_TAG: &str = "publication";

fn list_params(
    query: &PublicationListQueryDto,
) -> Result<ListParams<PublicationFilter, PublicationSortBy>, AppError> {
    Ok(ListParams::new(
        PublicationFilter::from_dto(query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    ))
}

/// List published books, papers, reports and speeches.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/publications",
    tag = PUBLICATION_TAG,
    params(PublicationListQueryDto),
    responses(
        (status = 200, description = "Page of published publications", body = PaginatedDto<PublicationDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_publications(
    State(state): State<AppState>,
    Query(query): Query<PublicationListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = list_params(&query)?;

    let page = PublicationService::new(&state.db)
        .list_published(params)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Publication::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/publications/slug/{slug}",
    tag = PUBLICATION_TAG,
    params(("slug" = String, Path, description = "Publication slug")),
    responses(
        (status = 200, description = "The published publication", body = PublicationDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_publication_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let publication = PublicationService::new(&state.db)
        .get_published_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(publication.into_dto())))
}

/// Count a download and return the file location.
///
/// Free publications can be downloaded anonymously; premium ones need a logged in
/// member.
///
/// # Access Control
/// - Public for free publications
/// - Any logged in, active member for premium publications
///
/// # Returns
/// - `200 OK` - File URL and the new download count
/// - `401 Unauthorized` - Premium publication requested without a session
/// - `404 Not Found` - No published publication with that id
#[utoipa::path(
    post,
    path = "/api/publications/{id}/download",
    tag = PUBLICATION_TAG,
    params(("id" = i32, Path, description = "Publication id")),
    responses(
        (status = 200, description = "Download counted", body = DownloadDto),
        (status = 401, description = "Login required for premium publications", body = ErrorDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_publication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).current().await?;

    let download = PublicationService::new(&state.db)
        .download(member.as_ref(), id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DownloadDto {
            file_url: download.file_url,
            download_count: download.download_count,
        }),
    ))
}

/// List publications in any status for the back office.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    get,
    path = "/api/admin/publications",
    tag = PUBLICATION_TAG,
    params(PublicationListQueryDto),
    responses(
        (status = 200, description = "Page of publications", body = PaginatedDto<PublicationDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publications(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PublicationListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = list_params(&query)?;
    let page = PublicationService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Publication::into_dto))))
}

/// Create a publication authored by the acting editor.
///
/// # Access Control
/// - `Editor` - Editors and admins
///
/// # Returns
/// - `201 Created` - The created publication
/// - `400 Bad Request` - Invalid fields
/// - `409 Conflict` - Slug already used
#[utoipa::path(
    post,
    path = "/api/admin/publications",
    tag = PUBLICATION_TAG,
    request_body = CreatePublicationDto,
    responses(
        (status = 201, description = "Publication created", body = PublicationDto),
        (status = 400, description = "Invalid publication data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_publication(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePublicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = CreatePublicationParams::from_dto(editor.id, payload)?;
    let publication = PublicationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(publication.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/publications/{id}",
    tag = PUBLICATION_TAG,
    params(("id" = i32, Path, description = "Publication id")),
    responses(
        (status = 200, description = "The publication", body = PublicationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let publication = PublicationService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(publication.into_dto())))
}

/// Update a publication; only its author may do so.
#[utoipa::path(
    put,
    path = "/api/admin/publications/{id}",
    tag = PUBLICATION_TAG,
    params(("id" = i32, Path, description = "Publication id")),
    request_body = UpdatePublicationDto,
    responses(
        (status = 200, description = "Publication updated", body = PublicationDto),
        (status = 400, description = "Invalid publication data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_publication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePublicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = UpdatePublicationParams::from_dto(id, payload)?;
    let publication = PublicationService::new(&state.db)
        .update(editor.id, params)
        .await?;

    Ok((StatusCode::OK, Json(publication.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/publications/{id}/status",
    tag = PUBLICATION_TAG,
    params(("id" = i32, Path, description = "Publication id")),
    request_body = StatusChangeDto<PublicationStatus>,
    responses(
        (status = 200, description = "Status changed", body = PublicationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_publication_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusChangeDto<PublicationStatus>>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let publication = PublicationService::new(&state.db)
        .set_status(editor.id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(publication.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/publications/{id}",
    tag = PUBLICATION_TAG,
    params(("id" = i32, Path, description = "Publication id")),
    responses(
        (status = 200, description = "Publication deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Publication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_publication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    PublicationService::new(&state.db).delete(editor.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Publication deleted"))))
}
