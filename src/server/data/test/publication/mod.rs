use crate::{
    model::publication::{PublicationKind, PublicationStatus},
    server::{
        data::publication::PublicationRepository,
        model::publication::{PublicationFilter, UpdatePublicationParams},
        query::ListParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::publication::PublicationFactory};

mod increment_downloads;
mod list;
mod update;
