//! SeaORM entity definitions for every table owned by the application.

pub mod prelude;

pub mod article;
pub mod book_order;
pub mod contact_submission;
pub mod content_tag;
pub mod gallery_item;
pub mod newsletter_subscriber;
pub mod plan;
pub mod publication;
pub mod subscription;
pub mod user;
