//! Page window computation and page metadata.

use crate::model::api::{PageMetaDto, PaginatedDto};

/// Upper bound applied to every requested page size.
pub const MAX_LIMIT: u64 = 100;

/// Highest page number accepted; keeps the row offset representable as a SQL `BIGINT`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// A normalized page request.
///
/// Pages are 1-based. Construction clamps the values so that every request reaching the
/// data layer has `1 <= page <= MAX_PAGE` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Builds a page request from raw query values.
    ///
    /// # Arguments
    /// - `page` - Requested 1-based page; missing or `0` selects the first page
    /// - `limit` - Requested page size; missing or `0` selects `default_limit`
    /// - `default_limit` - Page size used by the resource when none is given
    ///
    /// # Returns
    /// - `PageRequest` - Clamped request with `page` capped at [`MAX_PAGE`] and `limit`
    ///   capped at [`MAX_LIMIT`]
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1).min(MAX_PAGE);
        let limit = limit
            .filter(|l| *l >= 1)
            .unwrap_or(default_limit)
            .clamp(1, MAX_LIMIT);

        Self { page, limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of rows skipped before this page starts.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// Metadata returned alongside every page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.limit);

        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }

    pub fn into_dto(self) -> PageMetaDto {
        PageMetaDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

/// One page of items together with its metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            meta: PageMeta::new(request, total),
        }
    }

    /// Shapes the page into the `{ data, meta }` response body.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        PaginatedDto {
            data: self.items.into_iter().map(f).collect(),
            meta: self.meta.into_dto(),
        }
    }

    /// Converts every item while keeping the page metadata; stops at the first error.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?,
            meta: self.meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_and_resource_limit() {
        let request = PageRequest::new(None, None, 20);

        assert_eq!(request.page, 1);
        assert_eq!(request.limit(), 20);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn clamps_zero_page_and_zero_limit() {
        let request = PageRequest::new(Some(0), Some(0), 10);

        assert_eq!(request.page, 1);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn caps_limit_at_maximum() {
        let request = PageRequest::new(Some(1), Some(10_000), 10);

        assert_eq!(request.limit(), MAX_LIMIT);
    }

    #[test]
    fn offset_is_previous_pages_times_limit() {
        for page in 1..=5u64 {
            for limit in [1u64, 7, 10, 100] {
                let request = PageRequest::new(Some(page), Some(limit), 10);
                assert_eq!(request.offset(), (page - 1) * limit);
            }
        }
    }

    #[test]
    fn huge_page_keeps_offset_within_bigint() {
        let request = PageRequest::new(Some(u64::MAX), Some(MAX_LIMIT), 10);

        assert_eq!(request.page, MAX_PAGE);
        assert!(request.offset() <= i64::MAX as u64);
    }

    #[test]
    fn computes_total_pages_and_navigation_flags() {
        let meta = PageMeta::new(PageRequest::new(Some(2), Some(10), 10), 25);

        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);

        let last = PageMeta::new(PageRequest::new(Some(3), Some(10), 10), 25);
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        let meta = PageMeta::new(PageRequest::new(Some(2), Some(5), 10), 10);

        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let meta = PageMeta::new(PageRequest::new(None, None, 10), 0);

        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn page_beyond_end_reports_previous_only() {
        let meta = PageMeta::new(PageRequest::new(Some(9), Some(10), 10), 25);

        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }
}
