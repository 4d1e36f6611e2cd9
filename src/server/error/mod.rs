//! Error types and their HTTP responses.
//!
//! `AppError` is what every service and controller returns. Client mistakes (a missing
//! row, a bad field, a taken slug or an illegal status move) carry their message to the
//! response body; everything else is logged and answered with a generic 500.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Infrastructure failures convert in with `?` through the `#[from]` variants. The
/// message variants map to 4xx responses and are built by the services.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Session, role or ownership check failed.
    ///
    /// Responds through `AuthError::into_response()` with 401 or 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Arithmetic or state the application itself got wrong. 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// SeaORM query failure, including unique violations that slipped past a check. 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx failure while migrating the session store. 500.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store read or write failure. 500.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message; raised by input validation.
    #[error("{0}")]
    BadRequest(String),

    /// 409 with the given message.
    ///
    /// Duplicate slugs or emails, disallowed status transitions and deletes blocked by
    /// dependent rows.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Shorthand for a 404 naming the missing resource and its id.
    pub fn not_found(label: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} {} not found", label, id))
    }

    /// Maps a unique-constraint violation to a 409 with `message`.
    ///
    /// Used on inserts and updates guarded by an earlier availability check, where a
    /// concurrent writer can still take the value first. Other database errors stay 500s.
    pub fn conflict_on_unique(message: impl Into<String>) -> impl FnOnce(sea_orm::DbErr) -> Self {
        let message = message.into();
        move |err| match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message),
            _ => Self::DbErr(err),
        }
    }
}

/// Maps each variant to its status code and an `{ "error": ... }` body.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - 401 / 403 - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else, logged with details
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers 500 with a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
