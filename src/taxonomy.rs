//! Category and tag reference data
//!
//! The category table and popular-tag list are process-wide read-only
//! reference data: loaded once, exposed by reference, never mutated at
//! runtime. Frontmatter category strings resolve against the table by id
//! or slug; unknown strings synthesize an ad-hoc category so lenient
//! ingestion never rejects a document over its taxonomy.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::id::slugify;

/// A blog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Unique, URL-safe identifier
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Explicit sort order; ties break by name
    pub order: u32,
}

impl Category {
    fn builtin(id: &str, name: &str, slug: &str, description: &str, color: &str, order: u32) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: Some(description.to_string()),
            color: Some(color.to_string()),
            icon: None,
            order,
        }
    }
}

/// Sort order assigned to categories synthesized from unknown strings
const SYNTHESIZED_ORDER: u32 = 100;

static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();

static POPULAR_TAGS: &[&str] = &[
    "Angular",
    "TypeScript",
    "JavaScript",
    "RxJS",
    "Signals",
    "Performance",
    "Testing",
    "Architecture",
    "Best Practices",
    "Leadership",
    "Code Review",
    "Design Systems",
    "Accessibility",
    "SEO",
];

/// The built-in category table, sorted by order (ties by name)
pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(|| {
        let mut table = vec![
            Category::builtin(
                "general",
                "General",
                "general",
                "Notes that fit nowhere else",
                "#6B7280",
                0,
            ),
            Category::builtin(
                "technical",
                "Technical Deep Dives",
                "technical",
                "In-depth technical articles and tutorials",
                "#3B82F6",
                1,
            ),
            Category::builtin(
                "angular",
                "Angular",
                "angular",
                "Angular framework insights and best practices",
                "#DC2626",
                2,
            ),
            Category::builtin(
                "leadership",
                "Leadership & Management",
                "leadership",
                "Leadership insights and team management",
                "#7C3AED",
                3,
            ),
            Category::builtin(
                "practices",
                "Best Practices",
                "best-practices",
                "Development best practices and patterns",
                "#059669",
                4,
            ),
            Category::builtin(
                "performance",
                "Performance Optimization",
                "performance",
                "Performance optimization techniques",
                "#EA580C",
                5,
            ),
            Category::builtin(
                "architecture",
                "Software Architecture",
                "architecture",
                "System design and architecture patterns",
                "#8B5CF6",
                6,
            ),
        ];
        table.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        table
    })
}

/// The curated popular-tag list
pub fn popular_tags() -> &'static [&'static str] {
    POPULAR_TAGS
}

/// The fallback category used when frontmatter supplies none
pub fn default_category() -> &'static Category {
    find("general").expect("builtin category table contains `general`")
}

/// Look up a built-in category by id or slug (case-insensitive)
pub fn find(key: &str) -> Option<&'static Category> {
    categories()
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(key) || c.slug.eq_ignore_ascii_case(key))
}

/// Resolve a frontmatter category string to a category
///
/// Unknown strings yield a synthesized category (id and slug derived from
/// the input, title-cased name) so filtering by that category still works.
pub fn resolve(key: &str) -> Category {
    let key = key.trim();
    if key.is_empty() {
        return default_category().clone();
    }

    if let Some(category) = find(key) {
        return category.clone();
    }

    let slug = slugify(key);
    Category {
        id: slug.clone(),
        name: title_case(&slug),
        slug,
        description: None,
        color: None,
        icon: None,
        order: SYNTHESIZED_ORDER,
    }
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
