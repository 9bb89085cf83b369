//! CLI command handler for `render`.

use std::io::Write;
use std::path::PathBuf;

use crate::publish::{AssetSink, FsSink};
use crate::render::render_markdown_subset;
use crate::{ViewerError, ViewerResult};

/// Render a report markdown file to an HTML fragment.
///
/// Writes to `out` when given, else to stdout.
pub fn run(input: PathBuf, out: Option<PathBuf>) -> ViewerResult<()> {
    let markdown = std::fs::read_to_string(&input).map_err(|e| ViewerError::io(&input, e))?;
    let html = render_markdown_subset(&markdown);

    match out {
        Some(path) => {
            FsSink::new().write_file(&path, html.as_bytes())?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", html).map_err(|e| ViewerError::Message(format!("stdout: {e}")))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_to_file() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("report-github.md");
        std::fs::write(&input, "| A |\n|---|\n| 1 |\n").unwrap();
        let out = temp.path().join("out").join("report.html");

        run(input, Some(out.clone())).unwrap();

        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.starts_with("<table>"));
    }

    #[test]
    fn test_missing_input_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(run(temp.path().join("missing.md"), None).is_err());
    }
}
