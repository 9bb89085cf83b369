//! Static HTML pages for index entries.
//!
//! One detail page per entry plus a navigation page. No JavaScript; all
//! interpolated strings are HTML-escaped and the companion report goes
//! through the markdown subset renderer.

use crate::core::schema::{BenchmarkEntry, BriefDocument, IndexDocument, IndexEntry};
use crate::ingest::strip_single_quotes;
use crate::render::{html_escape, render_markdown_subset};

const PLACEHOLDER: &str = "-";

const STYLE: &str = r#"<style>
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: system-ui, -apple-system, sans-serif;
  background: #1a1a2e;
  color: #e8e8e8;
  padding: 24px;
  max-width: 1100px;
  margin: 0 auto;
}
a { color: #4ecdc4; text-decoration: none; }
a:hover { text-decoration: underline; }
.back { margin-bottom: 16px; font-size: 0.875rem; }
h1 { font-size: 1.5rem; margin-bottom: 8px; }
.meta { color: #9a9a9a; font-size: 0.8125rem; margin-bottom: 24px; }
.meta code { background: #16213e; padding: 2px 6px; border-radius: 3px; font-family: monospace; }
h2 { font-size: 1.125rem; margin: 24px 0 12px 0; color: #9a9a9a; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; background: #16213e; margin-bottom: 16px; }
th, td { padding: 8px 12px; text-align: left; border-bottom: 1px solid #2d3a5c; }
th { background: #1a1a2e; color: #9a9a9a; font-weight: 600; font-size: 0.75rem; }
.num { text-align: right; font-family: monospace; }
pre { background: #16213e; padding: 16px; border-radius: 4px; overflow-x: auto; font-size: 0.75rem; line-height: 1.4; }
.report p { margin: 8px 0; }
ul.entries { list-style: none; }
ul.entries li { padding: 8px 0; border-bottom: 1px solid #2d3a5c; }
ul.entries .title { color: #9a9a9a; font-size: 0.8125rem; margin-left: 8px; }
</style>"#;

/// Navigation label: distinct types joined by ", ", else the key.
pub fn entry_label(entry: &IndexEntry) -> String {
    if entry.types.is_empty() {
        entry.key.clone()
    } else {
        entry.types.join(", ")
    }
}

/// File name of an entry's detail page.
pub fn page_file_name(key: &str) -> String {
    format!("{}.html", key)
}

/// Format a nanosecond duration with an adaptive unit.
fn fmt_time_ns(ns: f64) -> String {
    if ns >= 1_000_000_000.0 {
        format!("{:.3} s", ns / 1_000_000_000.0)
    } else if ns >= 1_000_000.0 {
        format!("{:.3} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.3} μs", ns / 1_000.0)
    } else {
        format!("{:.3} ns", ns)
    }
}

fn fmt_bytes(bytes: u64) -> String {
    let value = bytes as f64;
    if value >= 1_000_000.0 {
        format!("{:.1} MB", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1} KB", value / 1_000.0)
    } else {
        format!("{} B", bytes)
    }
}

fn opt_cell(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(html_escape)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn benchmark_name(b: &BenchmarkEntry) -> Option<&str> {
    b.method_title
        .as_deref()
        .map(strip_single_quotes)
        .filter(|t| !t.is_empty())
        .or(b.method.as_deref())
        .or(b.display_info.as_deref())
}

fn render_benchmark_table(brief: &BriefDocument) -> String {
    if brief.entries().is_empty() {
        return "<p>No benchmarks recorded.</p>".to_string();
    }

    let mut html = String::from(
        "<table>\n<tr><th>Method</th><th>Type</th><th>Parameters</th>\
         <th class=\"num\">Mean</th><th class=\"num\">Allocated</th></tr>\n",
    );
    for b in brief.entries() {
        let mean = b
            .statistics
            .as_ref()
            .and_then(|s| s.mean)
            .map(fmt_time_ns)
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let allocated = b
            .memory
            .as_ref()
            .and_then(|m| m.bytes_allocated_per_operation)
            .map(fmt_bytes)
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            opt_cell(benchmark_name(b)),
            opt_cell(b.r#type.as_deref()),
            opt_cell(b.parameters.as_deref()),
            html_escape(&mean),
            html_escape(&allocated),
        ));
    }
    html.push_str("</table>");
    html
}

fn render_environment(brief: &BriefDocument) -> String {
    let Some(env) = brief.host_environment_info.as_ref() else {
        return String::new();
    };

    let mut rows = String::new();
    for (name, value) in env {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            // Nested objects and arrays are not shown
            _ => continue,
        };
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            html_escape(name),
            html_escape(&text)
        ));
    }
    if rows.is_empty() {
        return String::new();
    }
    format!(
        "<h2>Environment</h2>\n<table>\n<tr><th>Property</th><th>Value</th></tr>\n{}</table>\n",
        rows
    )
}

fn asset_link(data_href: &str, file: Option<&str>, label: &str) -> String {
    match file {
        Some(f) => format!(
            "<a href=\"{}/{}\">{}</a>",
            html_escape(data_href.trim_end_matches('/')),
            html_escape(f),
            html_escape(label)
        ),
        None => format!("{} ({})", html_escape(label), PLACEHOLDER),
    }
}

/// Render the detail page of one entry.
///
/// `brief` and `companion_markdown` are optional; a missing one leaves its
/// section with a placeholder. `data_href` is the relative location of the
/// mirrored result files as seen from the page.
pub fn render_entry_page(
    entry: &IndexEntry,
    brief: Option<&BriefDocument>,
    companion_markdown: Option<&str>,
    data_href: &str,
) -> String {
    let label = html_escape(&entry_label(entry));
    let title = html_escape(&entry.title);
    let key = html_escape(&entry.key);
    let date = html_escape(&entry.date);

    let links = [
        asset_link(data_href, Some(&entry.file_brief), "brief"),
        asset_link(data_href, entry.file_full.as_deref(), "full"),
        asset_link(data_href, entry.file_companion.as_deref(), "report"),
    ]
    .join(" &middot; ");

    let benchmarks = match brief {
        Some(b) => render_benchmark_table(b),
        None => "<p>Brief document unavailable.</p>".to_string(),
    };
    let environment = brief.map(render_environment).unwrap_or_default();

    let report = match companion_markdown {
        Some(md) => format!(
            "<h2>Report</h2>\n<div class=\"report\">{}</div>\n",
            render_markdown_subset(md)
        ),
        None => String::new(),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{label}</title>
{STYLE}
</head>
<body>
<div class="back"><a href="index.html">&larr; All results</a></div>
<h1>{label}</h1>
<div class="meta">
  {title} &middot; <code>{key}</code> &middot; {date}
</div>
<div class="meta">{links}</div>

<h2>Benchmarks</h2>
{benchmarks}
{environment}{report}</body>
</html>
"##
    )
}

/// Render the navigation page listing every entry in index order.
pub fn render_nav_page(document: &IndexDocument) -> String {
    let mut items = String::new();
    for entry in &document.entries {
        items.push_str(&format!(
            "<li><a href=\"{}\">{}</a><span class=\"title\">{}</span></li>\n",
            html_escape(&page_file_name(&entry.key)),
            html_escape(&entry_label(entry)),
            html_escape(&entry.title)
        ));
    }
    let generated_at = html_escape(&document.generated_at);
    let count = document.entries.len();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Benchmark results</title>
{STYLE}
</head>
<body>
<h1>Benchmark results</h1>
<div class="meta">{count} result(s) &middot; generated {generated_at}</div>
<ul class="entries">
{items}</ul>
</body>
</html>
"##
    )
}
