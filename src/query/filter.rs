//! Post filtering
//!
//! All criteria are conjunctive: a post matches the filter only when it
//! matches every populated criterion. Matching is case-insensitive;
//! category is an exact slug match, tag and author are substring matches,
//! the date range is inclusive on both ends.

use chrono::{DateTime, Utc};

use crate::post::Post;

/// Filter criteria for listing queries
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Filter by category slug (exact)
    pub category: Option<String>,
    /// Filter by tag (substring against each tag)
    pub tag: Option<String>,
    /// Filter by author name substring
    pub author: Option<String>,
    /// Filter by the featured flag
    pub featured: Option<bool>,
    /// Inclusive lower publish-date bound
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper publish-date bound
    pub date_to: Option<DateTime<Utc>>,
    /// Free-text term matched against title, excerpt, content, and tags
    pub search_term: Option<String>,
}

impl PostFilter {
    /// Create an empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the tag filter
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the author substring filter
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the featured filter
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Set the inclusive publish-date range; either bound may be open
    pub fn with_date_range(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Set the free-text search term
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Check whether a post matches all populated criteria
    pub fn matches(&self, post: &Post) -> bool {
        self.matches_category(post)
            && self.matches_tag(post)
            && self.matches_author(post)
            && self.matches_featured(post)
            && self.matches_date_range(post)
            && self.matches_search_term(post)
    }

    fn matches_category(&self, post: &Post) -> bool {
        match &self.category {
            Some(slug) => post.category.slug.eq_ignore_ascii_case(slug),
            None => true,
        }
    }

    fn matches_tag(&self, post: &Post) -> bool {
        match &self.tag {
            Some(tag) => {
                let needle = tag.to_lowercase();
                post.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }

    fn matches_author(&self, post: &Post) -> bool {
        match &self.author {
            Some(author) => post
                .author
                .name
                .to_lowercase()
                .contains(&author.to_lowercase()),
            None => true,
        }
    }

    fn matches_featured(&self, post: &Post) -> bool {
        match self.featured {
            Some(featured) => post.featured == featured,
            None => true,
        }
    }

    fn matches_date_range(&self, post: &Post) -> bool {
        let after_start = self.date_from.is_none_or(|from| post.publish_date >= from);
        let before_end = self.date_to.is_none_or(|to| post.publish_date <= to);
        after_start && before_end
    }

    fn matches_search_term(&self, post: &Post) -> bool {
        let Some(term) = &self.search_term else {
            return true;
        };
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        post.title.to_lowercase().contains(&term)
            || post.excerpt.to_lowercase().contains(&term)
            || post.content.to_lowercase().contains(&term)
            || post.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::post::parse_post;

    fn sample() -> Post {
        let raw = "---\n\
                   title: Testing Signals\n\
                   date: 2024-03-05\n\
                   category: angular\n\
                   tags: [Signals, RxJS]\n\
                   author: Jane Doe\n\
                   featured: true\n\
                   ---\n\
                   A body about reactive state.\n";
        parse_post(raw, &BlogConfig::default())
    }

    fn date(s: &str) -> DateTime<Utc> {
        format!("{}T00:00:00Z", s).parse().unwrap()
    }

    #[test]
    fn test_empty_filter_matches() {
        assert!(PostFilter::new().matches(&sample()));
    }

    #[test]
    fn test_category_exact_case_insensitive() {
        assert!(PostFilter::new().with_category("Angular").matches(&sample()));
        assert!(!PostFilter::new().with_category("angul").matches(&sample()));
        assert!(!PostFilter::new().with_category("leadership").matches(&sample()));
    }

    #[test]
    fn test_tag_substring() {
        assert!(PostFilter::new().with_tag("signal").matches(&sample()));
        assert!(PostFilter::new().with_tag("RXJS").matches(&sample()));
        assert!(!PostFilter::new().with_tag("ngrx").matches(&sample()));
    }

    #[test]
    fn test_author_substring() {
        assert!(PostFilter::new().with_author("jane").matches(&sample()));
        assert!(!PostFilter::new().with_author("john").matches(&sample()));
    }

    #[test]
    fn test_featured() {
        assert!(PostFilter::new().with_featured(true).matches(&sample()));
        assert!(!PostFilter::new().with_featured(false).matches(&sample()));
    }

    #[test]
    fn test_date_range_inclusive() {
        let post = sample();
        let filter = PostFilter::new()
            .with_date_range(Some(date("2024-03-05")), Some(date("2024-03-05")));
        assert!(filter.matches(&post));

        let filter = PostFilter::new().with_date_range(Some(date("2024-03-06")), None);
        assert!(!filter.matches(&post));

        let filter = PostFilter::new().with_date_range(None, Some(date("2024-03-04")));
        assert!(!filter.matches(&post));
    }

    #[test]
    fn test_search_term_fields() {
        assert!(PostFilter::new().with_search_term("reactive").matches(&sample()));
        assert!(PostFilter::new().with_search_term("TESTING").matches(&sample()));
        assert!(PostFilter::new().with_search_term("rxjs").matches(&sample()));
        assert!(!PostFilter::new().with_search_term("kubernetes").matches(&sample()));
    }

    #[test]
    fn test_blank_search_term_is_a_noop() {
        assert!(PostFilter::new().with_search_term("   ").matches(&sample()));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let filter = PostFilter::new().with_category("angular").with_tag("ngrx");
        assert!(!filter.matches(&sample()));
    }
}
