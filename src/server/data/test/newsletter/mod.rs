use crate::{
    model::newsletter::{Locale, SubscriberStatus},
    server::{
        data::newsletter::{SubscriberRepository, IMPORT_CHUNK_SIZE},
        model::newsletter::{SubscribeParams, SubscriberFilter},
        query::ListParams,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::subscriber::SubscriberFactory};

mod import;
mod list;
mod set_status;

fn signup(email: &str) -> SubscribeParams {
    SubscribeParams {
        email: email.to_string(),
        name: None,
        locale: Locale::En,
        source: Some("import".to_string()),
    }
}
