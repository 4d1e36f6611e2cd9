use crate::{
    model::subscription::SubscriptionStatus,
    server::{
        data::subscription::SubscriptionRepository,
        model::subscription::{SubscriptionFilter, SubscriptionStatusChange},
        query::ListParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder, factory, factory::subscription::SubscriptionFactory,
};

mod find_open;
mod update_status;
