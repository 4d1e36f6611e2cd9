//! Request and response shapes of the JSON API.
//!
//! Everything here is plain serde data with OpenAPI schemas; conversion from the domain
//! models happens in `server::model`.

pub mod api;
pub mod article;
pub mod contact;
pub mod gallery;
pub mod member;
pub mod newsletter;
pub mod order;
pub mod plan;
pub mod publication;
pub mod stats;
pub mod subscription;
