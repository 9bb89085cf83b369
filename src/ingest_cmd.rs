//! CLI command handler for `ingest`.
//!
//! Scans the artifacts directory, writes `index.json`, mirrors result files
//! into the data directory and publishes highlighted code snippets.

use tracing::info;

use crate::artifacts::scan_artifacts;
use crate::config::ViewerConfig;
use crate::highlight::Highlighter;
use crate::ingest::{build_index, write_index_json};
use crate::publish::{AssetSink, CodeMirrorOptions, MirrorSummary, mirror_code_snippets, mirror_results};
use crate::ViewerResult;

/// What one ingestion run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub indexed: usize,
    pub skipped: Vec<String>,
    pub orphans: usize,
    pub ignored: usize,
    pub results: MirrorSummary,
    pub code: MirrorSummary,
}

/// Run the ingestion pipeline.
///
/// Only an unreadable artifacts directory or a failed `index.json` write is
/// fatal; per-file problems are logged and counted.
pub fn run(
    cfg: &ViewerConfig,
    highlighter: &dyn Highlighter,
    sink: &mut dyn AssetSink,
    generated_at: &str,
) -> ViewerResult<IngestSummary> {
    info!(dir = %cfg.artifacts_dir.display(), "scanning artifacts");
    let scan = scan_artifacts(&cfg.artifacts_dir)?;

    let build = build_index(&scan, generated_at, &cfg.data_href_prefix);
    let index_path = cfg.index_path();
    write_index_json(&build.document, sink, &index_path)?;
    info!(
        path = %index_path.display(),
        entries = build.document.entries.len(),
        skipped = build.skipped.len(),
        "wrote index"
    );

    let results = mirror_results(&build.indexed, &cfg.data_dir, sink);
    info!(copied = results.copied, failed = results.failed, "mirrored result files");

    let options = CodeMirrorOptions {
        extension: &cfg.code_extension,
        language: &cfg.code_language,
        theme: &cfg.highlight_theme,
    };
    let code = mirror_code_snippets(&cfg.code_src_dir, &cfg.code_dir, options, highlighter, sink);
    info!(
        copied = code.copied,
        highlighted = code.highlighted,
        highlight_failed = code.highlight_failed,
        highlighter = highlighter.name(),
        "published code snippets"
    );

    Ok(IngestSummary {
        indexed: build.document.entries.len(),
        skipped: build.skipped,
        orphans: scan.orphans.len(),
        ignored: scan.ignored.len(),
        results,
        code,
    })
}
