//! Domain models and operation parameters.
//!
//! Each module holds the domain model of one resource with its conversions from the
//! entity (`from_entity`) and into the API shape (`into_dto`), the resource's typed list
//! filter and sort keys, validated create/update parameters and the status transition
//! table where the resource has one.

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
