use crate::server::data::stats::StatsRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{
        article::ArticleFactory, contact::ContactFactory, order::OrderFactory,
        publication::PublicationFactory, subscriber::SubscriberFactory,
        subscription::SubscriptionFactory,
    },
};

mod dashboard;
