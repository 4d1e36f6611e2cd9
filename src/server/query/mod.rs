//! Shared list-query machinery used by every resource.
//!
//! Each list endpoint follows the same shape: typed query parameters are turned into a
//! SeaORM condition by the [`filter::FilterBuilder`], ordered by the [`sort::SortSpec`]
//! resolved from the request, and windowed by a [`pager::PageRequest`]. Mutations go
//! through the [`lifecycle`] transition tables and the [`slug`] helpers before they reach
//! the data layer.

pub mod filter;
pub mod guard;
pub mod lifecycle;
pub mod pager;
pub mod slug;
pub mod sort;

use crate::server::query::sort::{SortKey, SortSpec};

/// Raw list request for one resource.
///
/// `F` is the resource's filter type and `K` its sort key enum. Page values are kept as
/// received; the repository clamps them against the resource's default page size.
#[derive(Debug, Clone)]
pub struct ListParams<F, K> {
    pub filter: F,
    pub sort: SortSpec<K>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl<F, K: SortKey> ListParams<F, K> {
    /// Builds list parameters from a typed filter and the raw paging/sorting values of
    /// a query string.
    pub fn new(
        filter: F,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Self {
        Self {
            filter,
            sort: SortSpec::resolve(sort_by, sort_order),
            page,
            limit,
        }
    }
}
