//! In-memory content store
//!
//! The store owns the authoritative post collection. Queries read a
//! snapshot under the shared lock and return clones, so a caller can never
//! mutate store state through a result. Counter mutations take the
//! exclusive lock; concurrent readers observe either the pre- or
//! post-mutation value, never a torn record.

mod query;

use parking_lot::RwLock;

use crate::config::BlogConfig;
use crate::post::{parse_post, Post};

/// The engine's post collection plus its read-only configuration
#[derive(Debug)]
pub struct ContentStore {
    config: BlogConfig,
    posts: RwLock<Vec<Post>>,
}

impl ContentStore {
    /// Create an empty store
    pub fn new(config: BlogConfig) -> Self {
        ContentStore {
            config,
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with already-parsed posts
    pub fn with_posts(config: BlogConfig, posts: Vec<Post>) -> Self {
        let store = ContentStore::new(config);
        for post in posts {
            store.insert(post);
        }
        store
    }

    /// Get the configuration this store was built with
    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    /// Total number of records, drafts included
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }

    /// Parse a raw document and insert the result
    ///
    /// Returns the record as stored, so on a re-ingest the carried-over
    /// engagement counters are visible to the caller.
    #[tracing::instrument(skip(self, raw))]
    pub fn ingest(&self, raw: &str) -> Post {
        let post = parse_post(raw, &self.config);
        let slug = post.slug.clone();
        self.insert(post);
        self.get_by_slug(&slug)
            .expect("post was just inserted under this slug")
    }

    /// Ingest a batch of raw documents; returns the number inserted
    ///
    /// Parsing is a pure per-document function, so callers with large
    /// batches may parse in parallel themselves and call `insert`; this
    /// convenience stays sequential.
    pub fn ingest_all<'a>(&self, documents: impl IntoIterator<Item = &'a str>) -> usize {
        documents.into_iter().map(|raw| self.ingest(raw)).count()
    }

    /// Insert a post, upserting by slug
    ///
    /// Replacing an existing slug keeps its engagement counters: an edit
    /// must not reset views or likes, which are monotonic.
    pub fn insert(&self, mut post: Post) {
        let mut posts = self.posts.write();
        match posts.iter_mut().find(|p| p.slug == post.slug) {
            Some(existing) => {
                post.views = existing.views;
                post.likes = existing.likes;
                tracing::debug!(slug = %post.slug, "replacing existing document");
                *existing = post;
            }
            None => posts.push(post),
        }
    }

    /// Look up a post by its exact slug
    ///
    /// Drafts are reachable here (authoring preview); absence is an empty
    /// result, not an error.
    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.read().iter().find(|p| p.slug == slug).cloned()
    }

    /// Record one view on the post with the given id
    ///
    /// Returns false (and does nothing) when the id is unknown.
    pub fn record_view(&self, id: &str) -> bool {
        self.mutate(id, |post| post.views += 1)
    }

    /// Record one like on the post with the given id
    ///
    /// Returns false (and does nothing) when the id is unknown.
    pub fn toggle_like(&self, id: &str) -> bool {
        self.mutate(id, |post| post.likes += 1)
    }

    /// Clear the draft flag on the post with the given id
    ///
    /// Publishing is idempotent; an unknown id is a no-op returning false.
    pub fn publish(&self, id: &str) -> bool {
        let published = self.mutate(id, |post| post.draft = false);
        if published {
            tracing::info!(id = %id, "document published");
        }
        published
    }

    fn mutate(&self, id: &str, apply: impl FnOnce(&mut Post)) -> bool {
        let mut posts = self.posts.write();
        match posts.iter_mut().find(|p| p.id.as_str() == id) {
            Some(post) => {
                apply(post);
                true
            }
            None => {
                tracing::debug!(id = %id, "mutation for unknown id ignored");
                false
            }
        }
    }

    /// Clone the full collection for a query
    pub(crate) fn snapshot(&self) -> Vec<Post> {
        self.posts.read().clone()
    }
}
