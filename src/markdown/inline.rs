//! Inline markup scanner
//!
//! A single pass over one line of text. At each position constructs are
//! tried in precedence order: code spans, then `***` before `**` before
//! `*`, strikethrough, images before links (so a link never swallows the
//! `![...]` syntax). Unmatched markers fall through as literal characters.

/// Render the inline constructs of a single line
pub(crate) fn render_inline(text: &str, site_host: Option<&str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((html, remaining)) = code_span(rest)
            .or_else(|| emphasis(rest, site_host))
            .or_else(|| strikethrough(rest, site_host))
            .or_else(|| image(rest))
            .or_else(|| link(rest, site_host))
        {
            out.push_str(&html);
            rest = remaining;
        } else {
            let ch = rest.chars().next().expect("rest is non-empty");
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

/// `` `code` ``: content passes through verbatim, never reparsed
fn code_span(rest: &str) -> Option<(String, &str)> {
    let after = rest.strip_prefix('`')?;
    let end = after.find('`')?;
    if end == 0 {
        return None;
    }
    Some((format!("<code>{}</code>", &after[..end]), &after[end + 1..]))
}

/// `***bold italic***`, `**bold**`, `*italic*`, longest marker first
fn emphasis<'a>(rest: &'a str, site_host: Option<&str>) -> Option<(String, &'a str)> {
    const MARKERS: [(&str, &str, &str); 3] = [
        ("***", "<strong><em>", "</em></strong>"),
        ("**", "<strong>", "</strong>"),
        ("*", "<em>", "</em>"),
    ];

    for (marker, open, close) in MARKERS {
        if let Some(after) = rest.strip_prefix(marker) {
            // An empty pair is not emphasis; let the markers fall through
            match after.find(marker) {
                Some(end) if end > 0 => {
                    let inner = render_inline(&after[..end], site_host);
                    return Some((
                        format!("{open}{inner}{close}"),
                        &after[end + marker.len()..],
                    ));
                }
                _ => {}
            }
        }
    }
    None
}

/// `~~struck~~`
fn strikethrough<'a>(rest: &'a str, site_host: Option<&str>) -> Option<(String, &'a str)> {
    let after = rest.strip_prefix("~~")?;
    let end = after.find("~~")?;
    if end == 0 {
        return None;
    }
    let inner = render_inline(&after[..end], site_host);
    Some((format!("<del>{inner}</del>"), &after[end + 2..]))
}

/// `![alt](url)`, emitted with lazy-loading semantics
fn image(rest: &str) -> Option<(String, &str)> {
    let after = rest.strip_prefix("![")?;
    let alt_end = after.find(']')?;
    let alt = &after[..alt_end];
    let after_alt = after[alt_end + 1..].strip_prefix('(')?;
    let url_end = after_alt.find(')')?;
    if url_end == 0 {
        return None;
    }
    let url = &after_alt[..url_end];

    Some((
        format!(r#"<img src="{url}" alt="{alt}" loading="lazy">"#),
        &after_alt[url_end + 1..],
    ))
}

/// `[text](url)`. External links open in a new tab without leaking a
/// referrer or opener handle
fn link<'a>(rest: &'a str, site_host: Option<&str>) -> Option<(String, &'a str)> {
    let after = rest.strip_prefix('[')?;
    let text_end = after.find(']')?;
    if text_end == 0 {
        return None;
    }
    let text = &after[..text_end];
    let after_text = after[text_end + 1..].strip_prefix('(')?;
    let url_end = after_text.find(')')?;
    if url_end == 0 {
        return None;
    }
    let url = &after_text[..url_end];

    let attrs = if is_external(url, site_host) {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    let text = render_inline(text, site_host);

    Some((
        format!(r#"<a href="{url}"{attrs}>{text}</a>"#),
        &after_text[url_end + 1..],
    ))
}

/// An external link is an absolute URL whose host differs from the site
/// host. Relative links are always internal; with no site host configured
/// every absolute link counts as external.
pub(crate) fn is_external(url: &str, site_host: Option<&str>) -> bool {
    let Some(host) = host_of(url) else {
        return false;
    };
    match site_host {
        Some(site) => !host.eq_ignore_ascii_case(site),
        None => true,
    }
}

/// Extract the host portion of an absolute http(s) URL
pub(crate) fn host_of(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    (!host.is_empty()).then_some(host)
}
