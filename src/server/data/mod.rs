//! Database repository layer.
//!
//! Every listable table is described once by a [`resource::Resource`] implementation and
//! gets filtering, sorting, paging, lookups, deletes and atomic counters from
//! [`resource::ResourceRepository`]. The per-entity repositories add inserts and updates
//! and convert entity models into domain models at this boundary.

pub mod article;
pub mod contact;
pub mod gallery;
pub mod member;
pub mod newsletter;
pub mod order;
pub mod plan;
pub mod publication;
pub mod resource;
pub mod stats;
pub mod subscription;
pub mod tag;

#[cfg(test)]
mod test;
