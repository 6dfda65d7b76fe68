//! Allow-list HTML sanitizer for canvas fragments.
//!
//! Fragments arrive from URL parameters and host frames, so they are treated
//! as untrusted before being injected as markup. Parsing and serialization go
//! through `ammonia` (html5ever), so attribute values are checked after
//! character references are decoded, the same way the browser will see them.
//!
//! RULES
//! =====
//! - Script-like elements (`script`, `style`, `iframe`, ...) are dropped
//!   together with their content.
//! - Other elements outside the allow-list are unwrapped: the tag goes, the
//!   text inside stays.
//! - Comments are dropped.
//! - Only allow-listed attributes survive; `on*` handlers never do.
//! - Links keep only `http`, `https`, and `mailto` schemes (or relative URLs).
//! - `style` values that can load resources are removed.

use std::borrow::Cow;
use std::collections::HashSet;

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "caption", "code", "col", "colgroup", "dd", "div", "dl", "dt", "em",
    "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "li", "ol", "p", "pre", "small", "span", "strong", "sub",
    "sup", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "u", "ul",
];

const DROPPED_WITH_CONTENT: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math", "textarea", "select",
    "frame", "frameset", "title", "head",
];

const ALLOWED_ATTRS: &[&str] = &["align", "class", "colspan", "href", "rowspan", "scope", "style", "title"];

const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

const BLOCKED_STYLE_TOKENS: &[&str] = &["url(", "expression(", "javascript:", "@import", "behavior:"];

/// Reduce `input` to the allow-listed subset of HTML.
pub fn sanitize_html(input: &str) -> String {
    builder().clean(input).to_string()
}

fn builder() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::empty();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .clean_content_tags(DROPPED_WITH_CONTENT.iter().copied().collect::<HashSet<_>>())
        .generic_attributes(ALLOWED_ATTRS.iter().copied().collect::<HashSet<_>>())
        .url_schemes(URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .link_rel(None)
        .strip_comments(true)
        .attribute_filter(filter_attribute);
    builder
}

/// `value` arrives with character references already decoded.
fn filter_attribute<'u>(_element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if attribute == "style" && !style_allowed(value) {
        return None;
    }
    Some(Cow::Borrowed(value))
}

fn style_allowed(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !BLOCKED_STYLE_TOKENS.iter().any(|token| compact.contains(token)) && !compact.contains('\\')
}
