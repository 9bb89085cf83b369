//! Mirror raw result files and benchmark sources into the publish area.
//!
//! Every failure here is per file: it is logged, counted and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::artifacts::ResultGroup;
use crate::highlight::Highlighter;
use crate::{ViewerError, ViewerResult};

use super::sink::AssetSink;

/// Counters for one mirroring pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorSummary {
    pub copied: usize,
    pub failed: usize,
    pub highlighted: usize,
    pub highlight_failed: usize,
}

/// How code snippets are discovered and highlighted.
#[derive(Debug, Clone, Copy)]
pub struct CodeMirrorOptions<'a> {
    /// File extension without the dot (e.g., "cs")
    pub extension: &'a str,
    /// Language tag passed to the highlighter
    pub language: &'a str,
    pub theme: &'a str,
}

/// Name of the precomputed highlight for a source file: `<original-name>.html`.
pub fn highlight_file_name(file_name: &str) -> String {
    format!("{}.html", file_name)
}

/// Copy the brief, full and companion files of every group into `data_dir`,
/// keeping file names.
pub fn mirror_results(
    groups: &[ResultGroup],
    data_dir: &Path,
    sink: &mut dyn AssetSink,
) -> MirrorSummary {
    let mut summary = MirrorSummary::default();

    for group in groups {
        let files = [Some(&group.brief), group.full.as_ref(), group.companion.as_ref()];
        for file in files.into_iter().flatten() {
            let dest = data_dir.join(&file.file_name);
            match sink.copy_file(&file.path, &dest) {
                Ok(()) => summary.copied += 1,
                Err(e) => {
                    warn!(key = %group.key, file = %file.file_name, error = %e, "failed to mirror result file");
                    summary.failed += 1;
                }
            }
        }
    }

    summary
}

/// List source files in `src_dir` with the given extension, sorted by name.
pub fn find_code_snippets(src_dir: &Path, extension: &str) -> ViewerResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(src_dir).map_err(|e| ViewerError::io(src_dir, e))?;

    let mut files = Vec::new();
    for entry in read_dir {
        let path = entry.map_err(|e| ViewerError::io(src_dir, e))?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy benchmark sources into `code_dir` and store a highlighted rendering
/// next to each copy.
///
/// A missing source directory yields an empty summary. A highlight failure
/// only means that file has no `.html` rendering.
pub fn mirror_code_snippets(
    src_dir: &Path,
    code_dir: &Path,
    options: CodeMirrorOptions<'_>,
    highlighter: &dyn Highlighter,
    sink: &mut dyn AssetSink,
) -> MirrorSummary {
    let mut summary = MirrorSummary::default();

    let sources = match find_code_snippets(src_dir, options.extension) {
        Ok(sources) => sources,
        Err(e) => {
            warn!(error = %e, "skipping code snippets");
            return summary;
        }
    };

    for src in sources {
        let Some(file_name) = src.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Err(e) = sink.copy_file(&src, &code_dir.join(file_name)) {
            warn!(file = %file_name, error = %e, "failed to copy code snippet");
            summary.failed += 1;
            continue;
        }
        summary.copied += 1;

        let rendered = fs::read_to_string(&src)
            .map_err(|e| ViewerError::io(&src, e))
            .and_then(|text| highlighter.highlight(&text, options.language, options.theme))
            .and_then(|html| {
                sink.write_file(&code_dir.join(highlight_file_name(file_name)), html.as_bytes())
            });

        match rendered {
            Ok(()) => summary.highlighted += 1,
            Err(e) => {
                debug!(file = %file_name, highlighter = highlighter.name(), error = %e, "no precomputed highlight");
                summary.highlight_failed += 1;
            }
        }
    }

    summary
}
