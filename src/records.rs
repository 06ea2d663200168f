//! Machine-readable output for downstream consumers
//!
//! A static-site generator or API layer consumes the engine's structured
//! output without linking against it; JSON Lines keeps that handoff
//! streamable and diff-friendly (one post per line).

use crate::error::Result;
use crate::post::Post;

/// Serialize posts as JSON Lines, one post per line
pub fn to_jsonl(posts: &[Post]) -> Result<String> {
    let mut out = String::new();
    for post in posts {
        out.push_str(&serde_json::to_string(post)?);
        out.push('\n');
    }
    Ok(out)
}

/// Serialize a single post as one JSON line
pub fn post_record(post: &Post) -> Result<String> {
    Ok(serde_json::to_string(post)?)
}
