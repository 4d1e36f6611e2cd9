//! HTTP request handlers.
//!
//! Each module covers one resource. Handlers check access with
//! [`AuthGuard`](crate::server::middleware::auth::AuthGuard), convert DTOs into params,
//! call the service layer and convert the result back into DTOs. Every handler carries a
//! `utoipa::path` annotation; the router collects them into the OpenAPI document.

pub mod article;
pub mod auth;
pub mod contact;
pub mod gallery;
pub mod member;
pub mod newsletter;
pub mod order;
pub mod plan;
pub mod publication;
pub mod stats;
pub mod subscription;
