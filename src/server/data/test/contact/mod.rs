use crate::{
    model::contact::ContactStatus,
    server::{
        data::contact::{ContactReply, ContactRepository},
        model::contact::{ContactFilter, CreateContactParams},
        query::ListParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::contact::ContactFactory};

mod list;
mod set_status;
