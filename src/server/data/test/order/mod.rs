use crate::{
    model::order::OrderStatus,
    server::{
        data::order::OrderRepository,
        model::order::{CreateOrderParams, OrderFilter},
        query::ListParams,
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::order::OrderFactory};

mod list;
mod write;
