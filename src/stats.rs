//! Aggregate statistics over the published corpus

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::post::Post;

/// Number of posts listed in the popularity/recency leaderboards
const TOP_POSTS: usize = 5;

/// Blog-wide aggregate counts; drafts are excluded throughout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStatistics {
    pub total_posts: usize,
    pub total_views: u64,
    pub total_likes: u64,
    /// Comment storage lives outside the engine; always 0 here
    pub total_comments: u64,
    pub categories_count: BTreeMap<String, usize>,
    pub tags_count: BTreeMap<String, usize>,
    pub most_popular_posts: Vec<Post>,
    pub recent_posts: Vec<Post>,
}

/// Compute statistics over a snapshot of the store
pub fn compute(posts: &[Post]) -> BlogStatistics {
    let published: Vec<&Post> = posts.iter().filter(|p| p.is_published()).collect();

    let mut categories_count: BTreeMap<String, usize> = BTreeMap::new();
    let mut tags_count: BTreeMap<String, usize> = BTreeMap::new();
    for post in &published {
        *categories_count.entry(post.category.id.clone()).or_default() += 1;
        for tag in &post.tags {
            *tags_count.entry(tag.clone()).or_default() += 1;
        }
    }

    let total_views = published.iter().map(|p| p.views).sum();
    let total_likes = published.iter().map(|p| p.likes).sum();

    let mut by_views = published.clone();
    by_views.sort_by(|a, b| {
        b.views
            .cmp(&a.views)
            .then_with(|| b.publish_date.cmp(&a.publish_date))
    });

    let mut by_date = published.clone();
    by_date.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

    BlogStatistics {
        total_posts: published.len(),
        total_views,
        total_likes,
        total_comments: 0,
        categories_count,
        tags_count,
        most_popular_posts: by_views.into_iter().take(TOP_POSTS).cloned().collect(),
        recent_posts: by_date.into_iter().take(TOP_POSTS).cloned().collect(),
    }
}
