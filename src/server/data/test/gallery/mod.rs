use crate::{
    model::gallery::{GalleryKind, GalleryStatus},
    server::{
        data::gallery::GalleryRepository,
        model::gallery::{CreateGalleryItemParams, GalleryFilter, UpdateGalleryItemParams},
        query::ListParams,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::gallery::GalleryItemFactory};

mod list;
mod write;
