use crate::{
    model::member::Role,
    server::{
        data::member::MemberRepository,
        model::member::{MemberFilter, UpdateMemberParams},
        query::ListParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod list;
mod update;
