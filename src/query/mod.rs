//! Query types and responses

pub mod filter;

use serde::{Deserialize, Serialize};

use crate::post::Post;
use crate::taxonomy::Category;

pub use filter::PostFilter;

/// Pagination window over a filtered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Build a pagination window; `page` and `page_size` are clamped to a
    /// minimum of 1 rather than rejected
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        Pagination {
            page,
            page_size,
            total,
            total_pages: total.div_ceil(page_size),
        }
    }

    /// Slice bounds into the full result set; an out-of-range page yields
    /// an empty window with the totals intact
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.page_size).min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        (start, end)
    }
}

/// One page of a filtered listing, plus the sidebar reference data the
/// host UI renders alongside it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
    pub categories: Vec<Category>,
    pub popular_tags: Vec<String>,
}

/// A single search result with its relevance indicator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub post: Post,
    /// Weighted count of matched fields
    pub score: u32,
    pub matched_fields: Vec<String>,
}
