//! In-process highlighting with syntect's bundled syntaxes and themes.

use anyhow::Context;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::{ViewerError, ViewerResult};

use super::traits::Highlighter;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Syntax highlighter backed by syntect.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntectHighlighter {
    /// Create a highlighter with the default syntax definitions and themes.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Names of the bundled themes, sorted.
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.theme_set.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Highlighter for SyntectHighlighter {
    fn name(&self) -> &str {
        "syntect"
    }

    fn highlight(&self, text: &str, language: &str, theme: &str) -> ViewerResult<String> {
        // Unknown languages fall back to plain text
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.themes.get(theme).ok_or_else(|| {
            ViewerError::Message(format!("unknown highlight theme: {theme}"))
        })?;

        let html = highlighted_html_for_string(text, &self.syntax_set, syntax, theme)
            .with_context(|| format!("syntect failed to highlight as {language}"))?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_csharp_produces_pre_block() {
        let hl = SyntectHighlighter::new();
        let html = hl
            .highlight("public class Foo { }\n", "cs", DEFAULT_THEME)
            .unwrap();
        assert!(html.starts_with("<pre"));
        assert!(html.contains("Foo"));
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let hl = SyntectHighlighter::new();
        let html = hl
            .highlight("var x = a < b;\n", "cs", DEFAULT_THEME)
            .unwrap();
        assert!(html.contains("&lt;"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let hl = SyntectHighlighter::new();
        assert!(hl.highlight("hello\n", "no-such-lang", DEFAULT_THEME).is_ok());
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let hl = SyntectHighlighter::new();
        let err = hl.highlight("x\n", "cs", "no-such-theme").unwrap_err();
        assert!(err.to_string().contains("no-such-theme"));
    }

    #[test]
    fn test_default_theme_is_bundled() {
        let hl = SyntectHighlighter::new();
        assert!(hl.theme_names().contains(&DEFAULT_THEME));
    }
}
