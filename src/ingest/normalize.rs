//! Normalize a brief result document into index metadata.

use crate::core::schema::{BenchmarkEntry, BriefDocument};
use crate::{ViewerError, ViewerResult};

/// Strip one layer of single quotes when present on both ends.
pub fn strip_single_quotes(s: &str) -> &str {
    s.strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(s)
}

/// Parse brief document text.
pub fn parse_brief(text: &str) -> ViewerResult<BriefDocument> {
    serde_json::from_str(text)
        .map_err(|e| ViewerError::Message(format!("failed to parse brief document: {e}")))
}

/// Display title: the document title without surrounding quotes, else the key.
pub fn extract_title(brief: &BriefDocument, key: &str) -> String {
    brief
        .title
        .as_deref()
        .map(strip_single_quotes)
        .filter(|t| !t.is_empty())
        .unwrap_or(key)
        .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn entry_tokens(entry: &BenchmarkEntry) -> impl Iterator<Item = &str> {
    let method_title = non_empty(&entry.method_title)
        .map(strip_single_quotes)
        .filter(|t| !t.is_empty());
    [
        method_title,
        non_empty(&entry.method),
        non_empty(&entry.r#type),
        non_empty(&entry.namespace),
        non_empty(&entry.parameters),
    ]
    .into_iter()
    .flatten()
}

/// Build the lower-cased search string for a result.
///
/// Token order: title, then per entry the method title, method, type,
/// namespace and parameters. Missing or empty values are skipped.
pub fn build_keywords(title: &str, brief: &BriefDocument) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !title.is_empty() {
        parts.push(title);
    }
    for entry in brief.entries() {
        parts.extend(entry_tokens(entry));
    }
    parts.join(" ").to_lowercase()
}

/// Distinct non-empty type names in first-seen order.
pub fn distinct_types(brief: &BriefDocument) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for ty in brief.entries().iter().filter_map(|e| non_empty(&e.r#type)) {
        if !types.iter().any(|t| t == ty) {
            types.push(ty.to_string());
        }
    }
    types
}
