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
        article::{
            ArticleDto, ArticleListQueryDto, ArticleStatus, CreateArticleDto, UpdateArticleDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::article::{
            Article, ArticleFilter, ArticleSortBy, CreateArticleParams, UpdateArticleParams,
        },
        query::ListParams,
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

fn list_params(
    query: &ArticleListQueryDto,
) -> Result<ListParams<ArticleFilter, ArticleSortBy>, AppError> {
    Ok(ListParams::new(
        ArticleFilter::from_dto(query)?,
        query.sort_by.as_deref(),
        query.sort_order.as_deref(),
        query.page,
        query.limit,
    ))
}

/// List published articles and blog posts.
///
/// Public listing used by the site. Any `status` filter in the query is replaced by
/// `published`.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of published articles
/// - `400 Bad Request` - Unknown filter value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleListQueryDto),
    responses(
        (status = 200, description = "Page of published articles", body = PaginatedDto<ArticleDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = list_params(&query)?;

    let page = ArticleService::new(&state.db).list_published(params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Article::into_dto))))
}

/// Read a published article by slug.
///
/// Every successful read increments the article's view count.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The article, with the view counted
/// - `404 Not Found` - No published article with that slug
#[utoipa::path(
    get,
    path = "/api/articles/slug/{slug}",
    tag = ARTICLE_TAG,
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The published article", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_article_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).view_published(&slug).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Like a published article.
///
/// # Access Control
/// - Any logged in, active member
///
/// # Returns
/// - `200 OK` - The article with its new like count
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No published article with that id
#[utoipa::path(
    post,
    path = "/api/articles/{id}/like",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Like counted", body = ArticleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let article = ArticleService::new(&state.db).like(id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// List articles in any status for the back office.
///
/// # Access Control
/// - `Editor` - Editors and admins
///
/// # Returns
/// - `200 OK` - Page of articles
/// - `400 Bad Request` - Unknown filter value
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an editor
#[utoipa::path(
    get,
    path = "/api/admin/articles",
    tag = ARTICLE_TAG,
    params(ArticleListQueryDto),
    responses(
        (status = 200, description = "Page of articles", body = PaginatedDto<ArticleDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ArticleListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = list_params(&query)?;
    let page = ArticleService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Article::into_dto))))
}

/// Create an article or blog post.
///
/// The acting editor becomes the author. Without an explicit slug one is generated
/// from the title.
///
/// # Access Control
/// - `Editor` - Editors and admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Article fields and tags
///
/// # Returns
/// - `201 Created` - The created article
/// - `400 Bad Request` - Invalid fields, or no slug could be derived from the title
/// - `409 Conflict` - Slug already used
#[utoipa::path(
    post,
    path = "/api/admin/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article created", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = CreateArticleParams::from_dto(editor.id, payload)?;
    let article = ArticleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = ArticleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an editor", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let article = ArticleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Update an article.
///
/// Only fields present in the body change; `tags`, when present, replaces the whole
/// tag list.
///
/// # Access Control
/// - `Editor` who authored the article
///
/// # Returns
/// - `200 OK` - The updated article
/// - `403 Forbidden` - Not the author
/// - `404 Not Found` - No article with that id
/// - `409 Conflict` - New slug already used
#[utoipa::path(
    put,
    path = "/api/admin/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let params = UpdateArticleParams::from_dto(id, payload)?;
    let article = ArticleService::new(&state.db)
        .update(editor.id, params)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Move an article through its lifecycle.
///
/// Publishing for the first time stamps `publishedAt`.
///
/// # Access Control
/// - `Editor` who authored the article
///
/// # Returns
/// - `200 OK` - The article in its new status
/// - `403 Forbidden` - Not the author
/// - `409 Conflict` - Transition not allowed from the current status
#[utoipa::path(
    put,
    path = "/api/admin/articles/{id}/status",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    request_body = StatusChangeDto<ArticleStatus>,
    responses(
        (status = 200, description = "Status changed", body = ArticleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusChangeDto<ArticleStatus>>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let article = ArticleService::new(&state.db)
        .set_status(editor.id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Delete an article and its tags.
///
/// # Access Control
/// - `Editor` who authored the article
#[utoipa::path(
    delete,
    path = "/api/admin/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    ArticleService::new(&state.db).delete(editor.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Article deleted"))))
}
