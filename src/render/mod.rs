//! HTML rendering for the report markdown subset.
//!
//! Only what the benchmark exporter's GitHub report uses is supported:
//! fenced code blocks, tables with `**bold**` cells, and plain lines.

pub mod inline;
pub mod markdown;
pub mod table;

pub use inline::{decode_entities, html_escape, render_inline, strip_outer_quotes};
pub use markdown::{MarkdownRenderer, State, Step, render_markdown_subset};
pub use table::{is_divider, normalize_row, split_row};
