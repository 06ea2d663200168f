//! Markdown to display-markup transformation
//!
//! A line-oriented block pass (fenced code, headings, blockquotes,
//! horizontal rules, list items, paragraph assembly) feeding a single-pass
//! inline scanner. The ordering constraints (fenced code before anything
//! else, level-6 headings before level-1, `***` before `**` before `*`)
//! are structural here rather than enforced by substitution order.
//!
//! Conversion is total and deterministic: any input produces output, and
//! malformed markdown degrades to literal text, never an error.

mod inline;

use crate::config::BlogConfig;

/// Markdown renderer bound to a site host for external-link detection
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    site_host: Option<String>,
}

/// Extract the host portion of an absolute http(s) URL
pub fn site_host_of(url: &str) -> Option<String> {
    inline::host_of(url).map(str::to_string)
}

/// One classified input line, prior to paragraph assembly
enum Line {
    /// A complete block element (heading, code block, quote, rule)
    Block(String),
    /// A wrapped list item awaiting run-length merging
    Item(String),
    /// Inline-rendered text destined for a paragraph
    Text(String),
    Blank,
}

impl MarkdownRenderer {
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            site_host: config.site_host(),
        }
    }

    pub fn with_site_host(site_host: Option<String>) -> Self {
        Self { site_host }
    }

    /// Convert a markdown body into markup text
    pub fn render(&self, markdown: &str) -> String {
        let normalized = markdown.replace("\r\n", "\n");
        let lines: Vec<&str> = normalized.lines().collect();
        let mut classified = Vec::with_capacity(lines.len());

        let mut i = 0;
        while i < lines.len() {
            // Fenced code is carved out before any other construct so its
            // interior is never reinterpreted as markdown
            if let Some((lang, close)) = fence(&lines, i) {
                classified.push(Line::Block(code_block(&lines[i + 1..close], lang)));
                i = close + 1;
                continue;
            }
            classified.push(self.classify(lines[i]));
            i += 1;
        }

        assemble(classified)
    }

    fn classify(&self, line: &str) -> Line {
        if line.trim().is_empty() {
            return Line::Blank;
        }
        if line == "---" {
            return Line::Block("<hr>".to_string());
        }
        if let Some((level, rest)) = heading(line) {
            return Line::Block(format!("<h{level}>{}</h{level}>", self.inline(rest)));
        }
        if let Some(rest) = blockquote(line) {
            return Line::Block(format!(
                "<blockquote><p>{}</p></blockquote>",
                self.inline(rest)
            ));
        }
        if let Some(rest) = list_item(line) {
            return Line::Item(format!("<li>{}</li>", self.inline(rest)));
        }
        Line::Text(self.inline(line))
    }

    fn inline(&self, text: &str) -> String {
        inline::render_inline(text, self.site_host.as_deref())
    }
}

/// Detect a fenced code block opening at `start`; returns the language tag
/// and the index of the closing fence line. An unclosed fence is no block
/// at all; the opening line passes through as literal text.
fn fence<'a>(lines: &[&'a str], start: usize) -> Option<(Option<&'a str>, usize)> {
    let rest = lines[start].strip_prefix("```")?;
    let tag = rest.trim();
    let lang = (!tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || "_+-#".contains(c)))
        .then_some(tag);

    let close = lines[start + 1..]
        .iter()
        .position(|l| l.trim_end() == "```")?
        + start
        + 1;
    Some((lang, close))
}

fn code_block(content: &[&str], lang: Option<&str>) -> String {
    let class = lang
        .map(|l| format!(" class=\"language-{l}\""))
        .unwrap_or_default();
    let code = content.join("\n");
    format!("<pre><code{class}>{}</code></pre>", escape_html(code.trim()))
}

/// Escape code-block interiors so their content stays verbatim
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A heading is a run of 1-6 `#` followed by whitespace; longer runs are
/// literal text
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = line[level..].strip_prefix([' ', '\t'])?;
    Some((level, rest.trim_start()))
}

fn blockquote(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?.strip_prefix([' ', '\t'])?;
    Some(rest.trim_start())
}

/// Bullet markers `*`, `-`, `+` or a numeric-dot prefix, each followed by
/// whitespace
fn list_item(line: &str) -> Option<&str> {
    for marker in ['*', '-', '+'] {
        if let Some(rest) = line
            .strip_prefix(marker)
            .and_then(|r| r.strip_prefix([' ', '\t']))
        {
            return Some(rest.trim_start());
        }
    }

    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..]
            .strip_prefix('.')
            .and_then(|r| r.strip_prefix([' ', '\t']))
        {
            return Some(rest.trim_start());
        }
    }
    None
}

/// Merge classified lines into final markup: consecutive list items fold
/// into one list, text runs become paragraphs with `<br>` for interior
/// newlines, and block elements stand alone (never paragraph-wrapped).
fn assemble(lines: Vec<Line>) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for line in lines {
        match line {
            Line::Item(item) => {
                flush_paragraph(&mut blocks, &mut paragraph);
                items.push(item);
            }
            Line::Block(html) => {
                flush_paragraph(&mut blocks, &mut paragraph);
                flush_items(&mut blocks, &mut items);
                blocks.push(html);
            }
            Line::Blank => {
                flush_paragraph(&mut blocks, &mut paragraph);
                flush_items(&mut blocks, &mut items);
            }
            Line::Text(text) => {
                flush_items(&mut blocks, &mut items);
                paragraph.push(text);
            }
        }
    }
    flush_paragraph(&mut blocks, &mut paragraph);
    flush_items(&mut blocks, &mut items);

    blocks.join("\n")
}

fn flush_paragraph(blocks: &mut Vec<String>, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    let joined = paragraph.join("<br>");
    paragraph.clear();
    // Whitespace-only paragraphs render nothing
    if !joined.trim().is_empty() {
        blocks.push(format!("<p>{joined}</p>"));
    }
}

fn flush_items(blocks: &mut Vec<String>, items: &mut Vec<String>) {
    if items.is_empty() {
        return;
    }
    blocks.push(format!("<ul>{}</ul>", items.concat()));
    items.clear();
}
