//! Mock highlighter for testing.

use std::cell::RefCell;

use crate::{ViewerError, ViewerResult};

use super::traits::Highlighter;

/// A recorded highlight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCall {
    pub text: String,
    pub language: String,
    pub theme: String,
}

/// Highlighter returning canned output without doing any real work.
#[derive(Debug, Default)]
pub struct MockHighlighter {
    /// Substrings that make a request fail when found in the source text
    fail_markers: Vec<String>,
    calls: RefCell<Vec<HighlightCall>>,
}

impl MockHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any request whose text contains `marker`.
    pub fn fail_when_contains(mut self, marker: impl Into<String>) -> Self {
        self.fail_markers.push(marker.into());
        self
    }

    pub fn calls(&self) -> Vec<HighlightCall> {
        self.calls.borrow().clone()
    }
}

impl Highlighter for MockHighlighter {
    fn name(&self) -> &str {
        "mock"
    }

    fn highlight(&self, text: &str, language: &str, theme: &str) -> ViewerResult<String> {
        self.calls.borrow_mut().push(HighlightCall {
            text: text.to_string(),
            language: language.to_string(),
            theme: theme.to_string(),
        });

        if self.fail_markers.iter().any(|m| text.contains(m.as_str())) {
            return Err(ViewerError::Message("mock highlighter failure".into()));
        }

        Ok(format!(
            "<pre class=\"mock {}\">{}</pre>",
            language,
            crate::render::html_escape(text)
        ))
    }
}
