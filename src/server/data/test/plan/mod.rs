use crate::{
    model::plan::PlanInterval,
    server::{
        data::{
            plan::{PlanRepository, PlanResource},
            resource::ResourceRepository,
        },
        model::plan::{CreatePlanParams, PlanFilter, UpdatePlanParams},
        query::ListParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::plan::PlanFactory};

mod delete;
mod list;
mod write;
