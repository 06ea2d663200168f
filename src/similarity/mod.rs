//! Related-content ranking
//!
//! Candidates are scored against a reference post by shared taxonomy:
//! a shared category outweighs any single tag, but tag overlap accumulates
//! without a cap. Unrelated candidates (score 0) never appear, even when
//! the result would otherwise come up short of the limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::PostId;
use crate::post::Post;
use crate::taxonomy::Category;

/// Points for sharing the reference's category
pub const CATEGORY_SCORE: u32 = 10;

/// Points per tag shared with the reference
pub const TAG_SCORE: u32 = 2;

/// Whether draft candidates may appear in recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelatedMode {
    /// Published candidates only
    #[default]
    Public,
    /// Authoring preview: draft candidates are eligible too
    AuthorPreview,
}

/// Summary projection of a recommended post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPost {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category: Category,
    pub publish_date: DateTime<Utc>,
    pub read_time: u32,
}

impl From<&Post> for RelatedPost {
    fn from(post: &Post) -> Self {
        RelatedPost {
            id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            cover_image: post.cover_image.clone(),
            category: post.category.clone(),
            publish_date: post.publish_date,
            read_time: post.read_time,
        }
    }
}

/// Relevance of `candidate` to `reference`
pub fn score(reference: &Post, candidate: &Post) -> u32 {
    let mut score = 0;

    if candidate.category.id == reference.category.id {
        score += CATEGORY_SCORE;
    }

    let shared_tags = candidate
        .tags
        .iter()
        .filter(|tag| reference.tags.contains(tag))
        .count() as u32;
    score += TAG_SCORE * shared_tags;

    score
}

/// Rank the posts related to `reference_id`, best first
///
/// Ties in score break toward the more recently published candidate. A
/// reference id absent from `posts` yields an empty list; to the caller
/// that is indistinguishable from "no relations found", and neither case
/// is an error.
pub fn rank(
    posts: &[Post],
    reference_id: &str,
    limit: usize,
    mode: RelatedMode,
) -> Vec<RelatedPost> {
    let Some(reference) = posts.iter().find(|p| p.id.as_str() == reference_id) else {
        return Vec::new();
    };

    let mut scored: Vec<(u32, &Post)> = posts
        .iter()
        .filter(|p| p.id != reference.id)
        .filter(|p| mode == RelatedMode::AuthorPreview || p.is_published())
        .map(|p| (score(reference, p), p))
        .filter(|(s, _)| *s > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.publish_date.cmp(&a.1.publish_date))
    });
    scored.truncate(limit);

    scored.into_iter().map(|(_, p)| RelatedPost::from(p)).collect()
}
