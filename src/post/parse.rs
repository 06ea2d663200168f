//! Raw document parsing
//!
//! The ingestion pipeline: split the frontmatter block from the body,
//! render the body, fill derived fields, resolve the category, and
//! assemble a `Post`. Parsing is a pure function of the input text and
//! configuration, so batch callers may run it in parallel; only insertion
//! into the store serializes.

use crate::config::BlogConfig;
use crate::id::{slugify, PostId};
use crate::markdown::MarkdownRenderer;
use crate::post::{Author, Frontmatter, Post, SeoMeta};
use crate::taxonomy;
use crate::text;

/// Split an optional leading frontmatter block from a raw document
///
/// A well-formed block starts with a `---` sentinel on the first line and
/// ends at the next line holding the closing sentinel; trailing whitespace
/// on sentinel lines is tolerated. Without a well-formed block the whole
/// input is body.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some((first, rest)) = raw.split_once('\n') else {
        return (None, raw);
    };
    if first.trim_end() != "---" {
        return (None, raw);
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(block), body);
        }
        offset += line.len();
    }

    // Unterminated fence: the entire input is body
    (None, raw)
}

/// Parse a raw document into a `Post`
///
/// Never fails: a missing or malformed metadata block falls back to the
/// default frontmatter and the whole input becomes the body.
#[tracing::instrument(skip(raw, config), fields(bytes = raw.len()))]
pub fn parse_post(raw: &str, config: &BlogConfig) -> Post {
    let (block, body) = split_front_matter(raw);
    let fm = match block {
        Some(block) => Frontmatter::parse(block),
        None => Frontmatter::defaults(),
    };

    let content = MarkdownRenderer::new(config).render(body);
    let plain = text::strip_markup(body);

    let excerpt = if fm.excerpt.is_empty() {
        text::excerpt(body, text::EXCERPT_LENGTH)
    } else {
        fm.excerpt.clone()
    };
    let read_time = fm.read_time.unwrap_or_else(|| text::reading_time(&plain));

    let slug = slugify(&fm.title);
    let id = PostId::from_slug(&slug);
    let category = taxonomy::resolve(&fm.category);

    let author = match &fm.author {
        Some(name) => Author::named(name.clone()),
        None => Author::named(config.author.clone()),
    };

    let seo = SeoMeta {
        title: fm.seo_title.clone().unwrap_or_else(|| fm.title.clone()),
        description: fm
            .seo_description
            .clone()
            .unwrap_or_else(|| excerpt.clone()),
        keywords: if fm.keywords.is_empty() {
            fm.tags.clone()
        } else {
            fm.keywords.clone()
        },
        og_image: fm
            .cover_image
            .clone()
            .or_else(|| Some(config.seo.default_image.clone())),
        canonical: None,
    };

    tracing::debug!(slug = %slug, draft = fm.draft, "parsed document");

    Post {
        id,
        slug,
        title: fm.title,
        excerpt,
        content,
        author,
        category,
        tags: fm.tags,
        publish_date: fm.date,
        updated_date: None,
        read_time,
        cover_image: fm.cover_image,
        featured: fm.featured,
        draft: fm.draft,
        views: 0,
        likes: 0,
        seo,
    }
}
