//! Pagination types shared by all list endpoints.

use serde::{Deserialize, Serialize};

use crate::links::PageLink;

/// Default page size applied when the requested size is invalid.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on page size; larger requests fall back to the default.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Pagination parameters as they arrive on the query string.
///
/// - `page_number`: 1-based; ≤ 0 normalizes to 1
/// - `page_size`: ≤ 0 or > 50 normalizes to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

impl PageQuery {
    /// Replace out-of-range values with their defaults.
    ///
    /// Call after deserializing from query params, before computing offsets.
    pub fn normalized(self) -> Self {
        Self {
            page_number: if self.page_number <= 0 {
                1
            } else {
                self.page_number
            },
            page_size: if self.page_size <= 0 || self.page_size > MAX_PAGE_SIZE {
                DEFAULT_PAGE_SIZE
            } else {
                self.page_size
            },
        }
    }

    /// Row offset of the first item on this page. Call on normalized values.
    pub fn offset(self) -> i64 {
        (self.page_number - 1) * self.page_size
    }
}

/// One page of a filtered listing plus navigation metadata.
///
/// Constructed fresh per request; never persisted. Contents are a
/// best-effort snapshot — the total count and the fetched rows may reflect
/// different instants when writes race the read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
    pub links: Vec<PageLink>,
}

impl<T> PagedResult<T> {
    /// Assemble a page from fetched items and the full filtered count.
    ///
    /// `page` must already be normalized. Links start empty; attach them
    /// with [`PagedResult::with_links`].
    pub fn new(items: Vec<T>, page: PageQuery, total_count: i64) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + page.page_size - 1) / page.page_size
        };
        Self {
            items,
            page_number: page.page_number,
            page_size: page.page_size,
            total_count,
            total_pages,
            has_previous: page.page_number > 1,
            has_next: page.page_number < total_pages,
            links: Vec::new(),
        }
    }

    /// Attach `self`/`next`/`previous` navigation links for the given
    /// request path and filter parameters.
    pub fn with_links<F: Serialize>(mut self, path: &str, filter: &F) -> Self {
        self.links = crate::links::page_links(
            path,
            filter,
            PageQuery {
                page_number: self.page_number,
                page_size: self.page_size,
            },
            self.has_previous,
            self.has_next,
        );
        self
    }

    /// Map the page items, keeping all metadata and links.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
            links: self.links,
        }
    }
}
