//! Line-oriented renderer for the report markdown subset.
//!
//! Supported: fenced code blocks, GitHub-style tables and plain paragraphs.
//! The renderer is a three-state machine (`Default`, `InFence`, `InTable`)
//! fed one line at a time with one line of lookahead for table detection.

use super::inline::{html_escape, render_inline};
use super::table::{is_divider, normalize_row, split_row};

const FENCE: &str = "```";

/// Renderer state between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Default,
    InFence {
        lang: String,
        code: Vec<String>,
    },
    InTable {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// How much input a transition consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The current line.
    Consumed,
    /// The current line and the lookahead line (table header + divider).
    ConsumedWithNext,
    /// Nothing; the current line must be fed again in the new state.
    Reprocess,
}

/// Incremental renderer; see [`render_markdown_subset`] for the one-shot form.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    state: State,
    out: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// HTML emitted so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Feed one line together with the line after it, if any.
    pub fn feed(&mut self, line: &str, next: Option<&str>) -> Step {
        let state = std::mem::take(&mut self.state);
        let (state, step) = match state {
            State::Default => self.on_default(line, next),
            State::InFence { lang, code } => self.on_fence(lang, code, line),
            State::InTable { headers, rows } => self.on_table(headers, rows, line),
        };
        self.state = state;
        step
    }

    /// Flush any open block and return the rendered fragment.
    pub fn finish(mut self) -> String {
        match std::mem::take(&mut self.state) {
            State::Default => {}
            State::InFence { lang, code } => self.emit_code(&lang, &code),
            State::InTable { headers, rows } => self.emit_table(&headers, &rows),
        }
        self.out
    }

    fn on_default(&mut self, line: &str, next: Option<&str>) -> (State, Step) {
        if let Some(rest) = line.strip_prefix(FENCE) {
            let fence = State::InFence {
                lang: rest.trim().to_string(),
                code: Vec::new(),
            };
            return (fence, Step::Consumed);
        }

        if line.contains('|') && next.is_some_and(is_divider) {
            let table = State::InTable {
                headers: split_row(line),
                rows: Vec::new(),
            };
            return (table, Step::ConsumedWithNext);
        }

        if !line.trim().is_empty() {
            self.out.push_str("<p>");
            self.out.push_str(&html_escape(line));
            self.out.push_str("</p>");
        }
        (State::Default, Step::Consumed)
    }

    fn on_fence(&mut self, lang: String, mut code: Vec<String>, line: &str) -> (State, Step) {
        if line.starts_with(FENCE) {
            self.emit_code(&lang, &code);
            return (State::Default, Step::Consumed);
        }
        code.push(line.to_string());
        (State::InFence { lang, code }, Step::Consumed)
    }

    fn on_table(
        &mut self,
        headers: Vec<String>,
        mut rows: Vec<Vec<String>>,
        line: &str,
    ) -> (State, Step) {
        if line.contains('|') && !line.trim().is_empty() {
            rows.push(normalize_row(split_row(line), headers.len()));
            return (State::InTable { headers, rows }, Step::Consumed);
        }
        self.emit_table(&headers, &rows);
        (State::Default, Step::Reprocess)
    }

    fn emit_code(&mut self, lang: &str, code: &[String]) {
        self.out.push_str("<pre><code class=\"language-");
        self.out.push_str(&html_escape(lang));
        self.out.push_str("\">");
        self.out.push_str(&html_escape(&code.join("\n")));
        self.out.push_str("</code></pre>");
    }

    fn emit_table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        self.out.push_str("<table><thead><tr>");
        for h in headers {
            self.out.push_str("<th>");
            self.out.push_str(&render_inline(h));
            self.out.push_str("</th>");
        }
        self.out.push_str("</tr></thead><tbody>");
        for row in rows {
            self.out.push_str("<tr>");
            for cell in row {
                self.out.push_str("<td>");
                self.out.push_str(&render_inline(cell));
                self.out.push_str("</td>");
            }
            self.out.push_str("</tr>");
        }
        self.out.push_str("</tbody></table>");
    }
}

/// Render report markdown to an HTML fragment.
///
/// The output has no wrapping root element.
pub fn render_markdown_subset(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut renderer = MarkdownRenderer::new();

    let mut i = 0;
    while i < lines.len() {
        match renderer.feed(lines[i], lines.get(i + 1).copied()) {
            Step::Consumed => i += 1,
            Step::ConsumedWithNext => i += 2,
            Step::Reprocess => {}
        }
    }

    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- transitions ---------------------------------------------------------

    #[test]
    fn test_default_to_fence() {
        let mut r = MarkdownRenderer::new();
        assert_eq!(r.feed("```cs", None), Step::Consumed);
        assert_eq!(
            r.state(),
            &State::InFence {
                lang: "cs".to_string(),
                code: vec![]
            }
        );
    }

    #[test]
    fn test_fence_collects_until_closing_fence() {
        let mut r = MarkdownRenderer::new();
        r.feed("``` ini ", Some("| a |"));
        r.feed("| a |", Some("|---|"));
        r.feed("|---|", Some("```"));
        assert!(matches!(r.state(), State::InFence { code, .. } if code.len() == 2));

        assert_eq!(r.feed("```", None), Step::Consumed);
        assert_eq!(r.state(), &State::Default);
        assert_eq!(
            r.output(),
            "<pre><code class=\"language-ini\">| a |\n|---|</code></pre>"
        );
    }

    #[test]
    fn test_default_to_table_consumes_divider() {
        let mut r = MarkdownRenderer::new();
        assert_eq!(r.feed("| A | B |", Some("|---|---|")), Step::ConsumedWithNext);
        assert!(matches!(r.state(), State::InTable { headers, .. } if headers.len() == 2));
    }

    #[test]
    fn test_pipe_line_without_divider_stays_default() {
        let mut r = MarkdownRenderer::new();
        assert_eq!(r.feed("a | b", Some("abc|---|---")), Step::Consumed);
        assert_eq!(r.state(), &State::Default);
        assert_eq!(r.output(), "<p>a | b</p>");
    }

    #[test]
    fn test_table_ends_on_blank_line_and_reprocesses() {
        let mut r = MarkdownRenderer::new();
        r.feed("| A |", Some("|---|"));
        assert_eq!(r.feed("| 1 |", Some("")), Step::Consumed);
        assert_eq!(r.feed("", None), Step::Reprocess);
        assert_eq!(r.state(), &State::Default);
        assert_eq!(r.feed("", None), Step::Consumed);
    }

    #[test]
    fn test_table_ends_on_pipeless_line() {
        let mut r = MarkdownRenderer::new();
        r.feed("| A |", Some("|---|"));
        assert_eq!(r.feed("Legends", None), Step::Reprocess);
        assert_eq!(r.feed("Legends", None), Step::Consumed);
        assert_eq!(
            r.finish(),
            "<table><thead><tr><th>A</th></tr></thead><tbody></tbody></table><p>Legends</p>"
        );
    }

    #[test]
    fn test_finish_flushes_unterminated_fence() {
        let mut r = MarkdownRenderer::new();
        r.feed("```", Some("x < y"));
        r.feed("x < y", None);
        assert_eq!(
            r.finish(),
            "<pre><code class=\"language-\">x &lt; y</code></pre>"
        );
    }

    // -- whole documents -----------------------------------------------------

    #[test]
    fn test_blank_lines_produce_nothing() {
        assert_eq!(render_markdown_subset(""), "");
        assert_eq!(render_markdown_subset("\n\n   \n"), "");
    }

    #[test]
    fn test_paragraphs_are_escaped() {
        assert_eq!(
            render_markdown_subset("Hello <world>\n\n  & friends"),
            "<p>Hello &lt;world&gt;</p><p>  &amp; friends</p>"
        );
    }

    #[test]
    fn test_paragraphs_get_no_inline_processing() {
        assert_eq!(
            render_markdown_subset("**'bold'**"),
            "<p>**&#x27;bold&#x27;**</p>"
        );
    }

    #[test]
    fn test_fenced_code_is_escaped_without_inline_processing() {
        let md = "```cs\nif (a < b) { **'x'** }\n```";
        assert_eq!(
            render_markdown_subset(md),
            "<pre><code class=\"language-cs\">if (a &lt; b) { **&#x27;x&#x27;** }</code></pre>"
        );
    }

    #[test]
    fn test_table_rows_normalized_to_header_width() {
        let md = "| A | B | C |\n|---|:--:|---:|\n| 1 |\n| 1 | 2 | 3 | 4 |";
        assert_eq!(
            render_markdown_subset(md),
            "<table><thead><tr><th>A</th><th>B</th><th>C</th></tr></thead><tbody>\
             <tr><td>1</td><td></td><td></td></tr>\
             <tr><td>1</td><td>2</td><td>3</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn test_invalid_divider_falls_through_to_paragraphs() {
        let md = "| A | B |\n|abc|---|\n| 1 | 2 |";
        assert_eq!(
            render_markdown_subset(md),
            "<p>| A | B |</p><p>|abc|---|</p><p>| 1 | 2 |</p>"
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let md = "| A |\r\n|---|\r\n| 1 |\r\n";
        assert_eq!(
            render_markdown_subset(md),
            "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>"
        );
    }
}
