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
        gallery::{
            CreateGalleryItemDto, GalleryItemDto, GalleryListQueryDto, GalleryStatus,
            UpdateGalleryItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::gallery::{
            CreateGalleryItemParams, GalleryFilter, GalleryItem, GallerySortBy,
            UpdateGalleryItemParams,
        },
        query::ListParams,
        service::gallery::GalleryService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

fn list_params(
    query: &GalleryListQueryDto,
) -> Result<ListParams<GalleryFilter, GallerySortBy>, AppError> {
    Ok(ListParams::new(
        GalleryFilter::from_dto(query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    ))
}

/// List published photos and videos.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    params(GalleryListQueryDto),
    responses(
        (status = 200, description = "Page of published gallery items", body = PaginatedDto<GalleryItemDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = list_params(&query)?;

    let page = GalleryService::new(&state.db).list_published(params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(GalleryItem::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "The published gallery item", body = GalleryItemDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = GalleryService::new(&state.db).get_published(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// List gallery items in any status for the back office.
///
/// # Access Control
/// - `Editor` - Editors and admins
#[utoipa::path(
    get,
    path = "/api/admin/gallery",
    tag = GALLERY_TAG,
    params(GalleryListQueryDto),
    responses(
        (status = 200, description = "Page of gallery items", body = PaginatedDto<GalleryItemDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_items(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<GalleryListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = list_params(&query)?;
    let page = GalleryService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(GalleryItem::into_dto))))
}

/// Register an uploaded photo or video.
///
/// # Access Control
/// - `Editor` - Editors and admins
///
/// # Returns
/// - `201 Created` - The created gallery item
/// - `400 Bad Request` - Invalid fields
#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    tag = GALLERY_TAG,
    request_body = CreateGalleryItemDto,
    responses(
        (status = 201, description = "Gallery item created", body = GalleryItemDto),
        (status = 400, description = "Invalid gallery item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gallery_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGalleryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = CreateGalleryItemParams::from_dto(editor.id, payload)?;
    let item = GalleryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "The gallery item", body = GalleryItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let item = GalleryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Update a gallery item; only the editor who added it may do so.
#[utoipa::path(
    put,
    path = "/api/admin/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery item id")),
    request_body = UpdateGalleryItemDto,
    responses(
        (status = 200, description = "Gallery item updated", body = GalleryItemDto),
        (status = 400, description = "Invalid gallery item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User did not add this item", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gallery_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGalleryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = UpdateGalleryItemParams::from_dto(id, payload)?;
    let item = GalleryService::new(&state.db)
        .update(editor.id, params)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/gallery/{id}/status",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery item id")),
    request_body = StatusChangeDto<GalleryStatus>,
    responses(
        (status = 200, description = "Status changed", body = GalleryItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User did not add this item", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gallery_item_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusChangeDto<GalleryStatus>>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let item = GalleryService::new(&state.db)
        .set_status(editor.id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/gallery/{id}",
    tag = GALLERY_TAG,
    params(("id" = i32, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "Gallery item deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User did not add this item", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    GalleryService::new(&state.db).delete(editor.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Gallery item deleted"))))
}
