//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with domain
//! models and params rather than DTOs or entity models, and they are where the shared
//! guards apply:
//!
//! - **Ownership**: author-owned content is only changed by its author
//! - **Lifecycle**: status changes follow each resource's transition table
//! - **Slugs**: explicit slugs must be free, generated ones are numbered until free

pub mod article;
pub mod contact;
pub mod gallery;
pub mod member;
pub mod newsletter;
pub mod order;
pub mod plan;
pub mod publication;
pub mod slug;
pub mod stats;
pub mod subscription;

#[cfg(test)]
mod test;
