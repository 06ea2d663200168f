//! Post records
//!
//! `Post` is the unit the store holds and queries return: rendered body,
//! resolved category, derived fields filled in, engagement counters. All
//! fields serialize camelCase so the JSON shape matches the host UI's
//! models.

pub mod frontmatter;
pub mod parse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::PostId;
use crate::taxonomy::Category;

pub use frontmatter::Frontmatter;
pub use parse::{parse_post, split_front_matter};

/// A blog document after ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    /// Unique within the store; re-ingesting a slug replaces the record
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Rendered display markup (not the raw markdown)
    pub content: String,
    pub author: Author,
    pub category: Category,
    /// Ordered as authored; order is display-significant
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    /// Estimated reading time in minutes (always >= 1)
    pub read_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub featured: bool,
    /// Drafts are hidden from listings, search, statistics, and
    /// recommendations, but reachable by direct slug lookup
    pub draft: bool,
    pub views: u64,
    pub likes: u64,
    pub seo: SeoMeta,
}

impl Post {
    pub fn is_published(&self) -> bool {
        !self.draft
    }
}

/// Document author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

impl Author {
    /// An author known only by name
    pub fn named(name: impl Into<String>) -> Self {
        Author {
            name: name.into(),
            email: None,
            avatar: None,
            bio: None,
            social_links: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// SEO metadata attached to each post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}
