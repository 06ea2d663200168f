//! Listing, search, and recommendation queries
//!
//! Every query here works on a snapshot and excludes drafts; only direct
//! slug lookup (in the parent module) reaches them.

use crate::post::Post;
use crate::query::{ListResponse, Pagination, PostFilter, SearchHit};
use crate::similarity::{self, RelatedMode, RelatedPost};
use crate::stats::{self, BlogStatistics};
use crate::taxonomy;

use super::ContentStore;

impl ContentStore {
    /// One page of the filtered, date-sorted listing
    ///
    /// `page` and `page_size` are clamped to a minimum of 1; a page past
    /// the end returns an empty page with accurate totals.
    #[tracing::instrument(skip(self, filter))]
    pub fn list(&self, page: usize, page_size: usize, filter: &PostFilter) -> ListResponse {
        let mut posts: Vec<Post> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.is_published())
            .filter(|p| filter.matches(p))
            .collect();
        sort_by_date_desc(&mut posts);

        let pagination = Pagination::new(page, page_size, posts.len());
        let (start, end) = pagination.bounds();

        ListResponse {
            posts: posts[start..end].to_vec(),
            pagination,
            categories: self.categories(),
            popular_tags: self.popular_tags(),
        }
    }

    /// `list` with the configured page size
    pub fn list_page(&self, page: usize, filter: &PostFilter) -> ListResponse {
        self.list(page, self.config().posts_per_page, filter)
    }

    /// Full-text search over published posts
    ///
    /// An empty or whitespace-only term is an explicit no-op (empty result,
    /// not "match all"). Hits carry a weighted relevance score and the list
    /// of fields the term matched.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.is_published())
            .filter_map(|post| score_hit(post, &term))
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.post.publish_date.cmp(&a.post.publish_date))
        });
        hits
    }

    /// Featured posts, newest first
    pub fn featured(&self, limit: usize) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.is_published() && p.featured)
            .collect();
        sort_by_date_desc(&mut posts);
        posts.truncate(limit);
        posts
    }

    /// Most recent published posts
    pub fn recent(&self, limit: usize) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.is_published())
            .collect();
        sort_by_date_desc(&mut posts);
        posts.truncate(limit);
        posts
    }

    /// `featured` with the configured count
    pub fn featured_posts(&self) -> Vec<Post> {
        self.featured(self.config().featured_posts_count)
    }

    /// `recent` with the configured count
    pub fn recent_posts(&self) -> Vec<Post> {
        self.recent(self.config().recent_posts_count)
    }

    /// Posts related to the given reference id, best match first
    pub fn related(&self, id: &str, limit: usize, mode: RelatedMode) -> Vec<RelatedPost> {
        similarity::rank(&self.snapshot(), id, limit, mode)
    }

    /// Public-mode recommendations with the configured count
    pub fn related_posts(&self, id: &str) -> Vec<RelatedPost> {
        self.related(id, self.config().related_posts_count, RelatedMode::Public)
    }

    /// Aggregate statistics over the published corpus
    pub fn statistics(&self) -> BlogStatistics {
        stats::compute(&self.snapshot())
    }

    /// The category reference table, in display order
    pub fn categories(&self) -> Vec<taxonomy::Category> {
        taxonomy::categories().to_vec()
    }

    /// The curated popular-tag list
    pub fn popular_tags(&self) -> Vec<String> {
        taxonomy::popular_tags()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }
}

/// Publish date descending; ties break by slug so ordering is total
fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.publish_date
            .cmp(&a.publish_date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Score one post against a lowercased search term
fn score_hit(post: Post, term: &str) -> Option<SearchHit> {
    const TITLE_WEIGHT: u32 = 3;
    const TAG_WEIGHT: u32 = 2;
    const CATEGORY_WEIGHT: u32 = 2;
    const TEXT_WEIGHT: u32 = 1;

    let mut score = 0;
    let mut matched_fields = Vec::new();

    if post.title.to_lowercase().contains(term) {
        score += TITLE_WEIGHT;
        matched_fields.push("title".to_string());
    }
    if post.tags.iter().any(|t| t.to_lowercase().contains(term)) {
        score += TAG_WEIGHT;
        matched_fields.push("tags".to_string());
    }
    if post.category.name.to_lowercase().contains(term) {
        score += CATEGORY_WEIGHT;
        matched_fields.push("category".to_string());
    }
    if post.excerpt.to_lowercase().contains(term) {
        score += TEXT_WEIGHT;
        matched_fields.push("excerpt".to_string());
    }
    if post.content.to_lowercase().contains(term) {
        score += TEXT_WEIGHT;
        matched_fields.push("content".to_string());
    }

    (score > 0).then_some(SearchHit {
        post,
        score,
        matched_fields,
    })
}
