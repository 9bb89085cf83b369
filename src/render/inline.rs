//! Inline rendering for table cells.
//!
//! Cells are entity-decoded, unquoted, escaped and only then scanned for
//! `**bold**` spans, so escaping can never introduce markup.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BOLD_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\*'(.*?)'\*\*\s*$").expect("valid regex"));
static PLAIN_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*'(.*?)'\s*$").expect("valid regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// HTML-escape a string for safe insertion into HTML content or attributes.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Decode the entities the report exporter pre-encodes.
///
/// Replacements run in sequence, `&amp;` first.
pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
}

/// Strip one layer of surrounding single quotes.
///
/// `**'text'**` keeps its bold markers and loses the inner quotes;
/// `'text'` becomes `text`; anything else is returned unchanged.
pub fn strip_outer_quotes(s: &str) -> Cow<'_, str> {
    if let Some(caps) = BOLD_QUOTED.captures(s) {
        return Cow::Owned(format!("**{}**", &caps[1]));
    }
    if let Some(caps) = PLAIN_QUOTED.captures(s) {
        return Cow::Owned(caps[1].to_string());
    }
    Cow::Borrowed(s)
}

/// Render an already-escaped string's `**bold**` spans as `<strong>`.
fn render_bold(escaped: &str) -> Cow<'_, str> {
    BOLD.replace_all(escaped, "<strong>$1</strong>")
}

/// Render a table header or data cell to HTML.
pub fn render_inline(cell: &str) -> String {
    let decoded = decode_entities(cell);
    let unquoted = strip_outer_quotes(&decoded);
    let escaped = html_escape(&unquoted);
    render_bold(&escaped).into_owned()
}
