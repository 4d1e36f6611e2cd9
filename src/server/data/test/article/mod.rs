use crate::{
    model::article::{ArticleKind, ArticleStatus},
    server::{
        data::{
            article::{ArticleRepository, ArticleResource},
            resource::ResourceRepository,
        },
        model::article::{ArticleFilter, ArticleSortBy, CreateArticleParams, UpdateArticleParams},
        query::{pager::MAX_PAGE, ListParams},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod increment;
mod list;
mod slug_taken;
mod update;

fn params(filter: ArticleFilter) -> ListParams<ArticleFilter, ArticleSortBy> {
    ListParams::new(filter, None, None, None, None)
}
