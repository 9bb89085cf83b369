//! Highlighter capability.

use crate::ViewerResult;

/// Renders source text to highlighted HTML.
///
/// Highlighting is best effort: callers treat an error as "no precomputed
/// highlight" for that file and carry on.
pub trait Highlighter {
    /// Short name used in logs (e.g., "syntect", "command").
    fn name(&self) -> &str;

    /// Highlight `text` written in `language` using the named `theme`.
    fn highlight(&self, text: &str, language: &str, theme: &str) -> ViewerResult<String>;
}
