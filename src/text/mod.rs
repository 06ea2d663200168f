//! Plain-text utilities for derived fields
//!
//! Reading time and excerpts are computed from a stripped plain-text view
//! of the document body: markup tags and markdown control characters
//! removed, whitespace runs collapsed.

use std::sync::OnceLock;

use regex::Regex;

/// Fixed reading rate used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Length budget for generated excerpts, in characters
pub const EXCERPT_LENGTH: usize = 160;

/// Fraction of the budget past which a sentence-ending period is preferred
/// over a word boundary when truncating
const SENTENCE_CUT_RATIO: f64 = 0.8;

static MARKUP_TAG_RE: OnceLock<Regex> = OnceLock::new();
static CONTROL_CHAR_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn markup_tag_re() -> &'static Regex {
    MARKUP_TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn control_char_re() -> &'static Regex {
    CONTROL_CHAR_RE.get_or_init(|| Regex::new(r"[#*`_~\[\]()]").expect("valid regex"))
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Reduce a document body to plain text
///
/// Removes markup tags and markdown control characters, then collapses
/// whitespace runs to single spaces and trims.
pub fn strip_markup(text: &str) -> String {
    let no_tags = markup_tag_re().replace_all(text, "");
    let no_controls = control_char_re().replace_all(&no_tags, "");
    whitespace_re().replace_all(&no_controls, " ").trim().to_string()
}

/// Count whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes, floored at 1
pub fn reading_time(plain_text: &str) -> u32 {
    word_count(plain_text).div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Generate a plain-text excerpt within the given character budget
///
/// Within budget the stripped text is returned as-is. Over budget, the cut
/// point prefers the last sentence-ending period when it falls past 80% of
/// the budget, then the last word boundary (with an ellipsis), then a hard
/// cut (with an ellipsis).
pub fn excerpt(content: &str, max_length: usize) -> String {
    let plain = strip_markup(content);
    let chars: Vec<char> = plain.chars().collect();

    if chars.len() <= max_length {
        return plain;
    }

    let truncated = &chars[..max_length];

    if let Some(last_period) = truncated.iter().rposition(|&c| c == '.') {
        if last_period as f64 > max_length as f64 * SENTENCE_CUT_RATIO {
            return truncated[..=last_period].iter().collect();
        }
    }

    match truncated.iter().rposition(|&c| c == ' ') {
        Some(last_space) if last_space > 0 => {
            let mut cut: String = truncated[..last_space].iter().collect();
            cut.push_str("...");
            cut
        }
        _ => {
            let mut cut: String = truncated.iter().collect();
            cut.push_str("...");
            cut
        }
    }
}
