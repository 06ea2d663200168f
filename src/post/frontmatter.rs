//! Frontmatter parsing
//!
//! The metadata block is line-oriented, not a YAML document: each line
//! splits at its first colon, values are trimmed and lose one layer of
//! surrounding matching quotes, and `[...]` lists split on commas.
//! Unknown keys are dropped without complaint; ingestion is deliberately
//! lenient and never rejects a document over its metadata.

use chrono::{DateTime, NaiveDate, Utc};

/// Parsed document metadata (consumed at ingestion, not stored)
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter {
    pub title: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub keywords: Vec<String>,
    pub featured: bool,
    pub draft: bool,
    pub read_time: Option<u32>,
}

impl Frontmatter {
    /// Defaults used when a document carries no well-formed metadata block
    pub fn defaults() -> Self {
        Frontmatter {
            title: "Untitled Post".to_string(),
            date: Utc::now(),
            category: "general".to_string(),
            tags: Vec::new(),
            excerpt: String::new(),
            cover_image: None,
            author: None,
            seo_title: None,
            seo_description: None,
            keywords: Vec::new(),
            featured: false,
            draft: false,
            read_time: None,
        }
    }

    /// Parse a metadata block into a frontmatter record
    ///
    /// Every recognized key overrides its default; everything else is
    /// ignored, including lines without a colon.
    pub fn parse(block: &str) -> Self {
        let mut fm = Frontmatter::defaults();

        for line in block.lines() {
            let Some((key, raw_value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = strip_quotes(raw_value.trim());

            match key {
                "title" => fm.title = value.to_string(),
                "date" => {
                    if let Some(date) = parse_date(value) {
                        fm.date = date;
                    }
                }
                "category" => fm.category = value.to_string(),
                "excerpt" => fm.excerpt = value.to_string(),
                "coverImage" => fm.cover_image = Some(value.to_string()),
                "author" => fm.author = Some(value.to_string()),
                "seoTitle" => fm.seo_title = Some(value.to_string()),
                "seoDescription" => fm.seo_description = Some(value.to_string()),
                "tags" => {
                    if let Some(items) = parse_list(value) {
                        fm.tags = items;
                    }
                }
                "keywords" => {
                    if let Some(items) = parse_list(value) {
                        fm.keywords = items;
                    }
                }
                "featured" => fm.featured = value.to_lowercase() == "true",
                "draft" => fm.draft = value.to_lowercase() == "true",
                // A read time of 0 is as good as unset: the invariant floors at 1
                "readTime" => fm.read_time = value.parse::<u32>().ok().filter(|m| *m > 0),
                _ => {}
            }
        }

        fm
    }
}

/// Strip a single layer of surrounding matching quotes
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a `[...]` bracketed, comma-separated list
///
/// Each element is independently trimmed and quote-stripped; empty
/// elements are dropped. Returns `None` when the value is not bracketed.
fn parse_list(value: &str) -> Option<Vec<String>> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;

    Some(
        inner
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

/// Best-effort date parsing: RFC 3339, then bare `YYYY-MM-DD`
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let fm = Frontmatter::defaults();
        assert_eq!(fm.title, "Untitled Post");
        assert_eq!(fm.category, "general");
        assert!(fm.tags.is_empty());
        assert!(fm.excerpt.is_empty());
        assert!(!fm.featured);
        assert!(!fm.draft);
        assert!(fm.read_time.is_none());
    }

    #[test]
    fn test_parse_known_keys() {
        let block = "title: \"Angular Signals\"\n\
                     date: 2024-01-10\n\
                     category: angular\n\
                     tags: [signals, rxjs]\n\
                     excerpt: 'A quick tour.'\n\
                     coverImage: /img/signals.jpg\n\
                     author: Jane Doe\n\
                     featured: true\n\
                     draft: false\n\
                     readTime: 8";
        let fm = Frontmatter::parse(block);

        assert_eq!(fm.title, "Angular Signals");
        assert_eq!(fm.date, Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());
        assert_eq!(fm.category, "angular");
        assert_eq!(fm.tags, vec!["signals", "rxjs"]);
        assert_eq!(fm.excerpt, "A quick tour.");
        assert_eq!(fm.cover_image.as_deref(), Some("/img/signals.jpg"));
        assert_eq!(fm.author.as_deref(), Some("Jane Doe"));
        assert!(fm.featured);
        assert!(!fm.draft);
        assert_eq!(fm.read_time, Some(8));
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let fm = Frontmatter::parse("title: Kept\nlayout: post\nweight: 3");
        assert_eq!(fm.title, "Kept");
        // No trace of the unknown keys anywhere
        assert!(fm.tags.is_empty());
        assert!(fm.keywords.is_empty());
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let fm = Frontmatter::parse("not metadata at all\ntitle: Still Works");
        assert_eq!(fm.title, "Still Works");
    }

    #[test]
    fn test_quote_stripping_single_layer() {
        let fm = Frontmatter::parse("title: \"'nested'\"");
        assert_eq!(fm.title, "'nested'");
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        let fm = Frontmatter::parse("title: \"unterminated");
        assert_eq!(fm.title, "\"unterminated");
    }

    #[test]
    fn test_tags_require_brackets() {
        let fm = Frontmatter::parse("tags: signals, rxjs");
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_list_elements_quote_stripped_and_trimmed() {
        let fm = Frontmatter::parse("keywords: [ 'a' , \"b\", c ]");
        assert_eq!(fm.keywords, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list() {
        let fm = Frontmatter::parse("tags: []");
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_booleans_compare_lowercased() {
        assert!(Frontmatter::parse("featured: TRUE").featured);
        assert!(Frontmatter::parse("draft: True").draft);
        assert!(!Frontmatter::parse("featured: yes").featured);
    }

    #[test]
    fn test_read_time_fallback_on_garbage() {
        assert_eq!(Frontmatter::parse("readTime: fast").read_time, None);
        assert_eq!(Frontmatter::parse("readTime: 0").read_time, None);
        assert_eq!(Frontmatter::parse("readTime: 12").read_time, Some(12));
    }

    #[test]
    fn test_date_rfc3339() {
        let fm = Frontmatter::parse("date: 2024-02-01T09:30:00Z");
        assert_eq!(fm.date, Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_unparseable_date_falls_back_to_now() {
        let before = Utc::now();
        let fm = Frontmatter::parse("date: next tuesday");
        assert!(fm.date >= before);
    }

    #[test]
    fn test_value_split_at_first_colon_only() {
        let fm = Frontmatter::parse("title: Rust: The Good Parts");
        assert_eq!(fm.title, "Rust: The Good Parts");
    }
}
