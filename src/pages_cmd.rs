//! CLI command handler for `pages`.
//!
//! Builds the static entry pages from a previously written `index.json`.

use std::path::PathBuf;

use tracing::info;

use crate::ingest::read_index_json;
use crate::pages::{PagesSummary, write_entry_pages};
use crate::publish::FsSink;
use crate::{ViewerError, ViewerResult};

/// Run the `pages` command.
///
/// Reads `<data_dir>/index.json` and the mirrored result files next to it
/// and writes `<out_dir>/<key>.html` plus `<out_dir>/index.html`.
pub fn run(data_dir: PathBuf, out_dir: PathBuf, data_href: String) -> ViewerResult<PagesSummary> {
    let index_path = data_dir.join("index.json");
    if !index_path.exists() {
        return Err(ViewerError::Message(format!(
            "index not found: {} (run `ingest` first)",
            index_path.display()
        )));
    }

    let document = read_index_json(&index_path)?;
    info!(entries = document.entries.len(), "read index");

    let mut sink = FsSink::new();
    let summary = write_entry_pages(&document, &data_dir, &out_dir, &data_href, &mut sink)?;
    eprintln!(
        "Wrote {} page(s) to {} ({} degraded, {} failed)",
        summary.written,
        out_dir.display(),
        summary.degraded,
        summary.failed
    );
    Ok(summary)
}
