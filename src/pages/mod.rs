//! Static entry pages and navigation generated from `index.json`.

pub mod entry_html;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::schema::{BriefDocument, IndexDocument, IndexEntry};
use crate::ingest::parse_brief;
use crate::publish::AssetSink;
use crate::{ViewerError, ViewerResult};

pub use entry_html::{entry_label, page_file_name, render_entry_page, render_nav_page};

/// Name of the navigation page inside the pages directory.
pub const NAV_PAGE: &str = "index.html";

/// Counters for one page generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagesSummary {
    pub written: usize,
    /// Pages written with at least one section missing
    pub degraded: usize,
    pub failed: usize,
}

fn read_brief(data_dir: &Path, entry: &IndexEntry) -> ViewerResult<BriefDocument> {
    let path = data_dir.join(&entry.file_brief);
    let text = fs::read_to_string(&path).map_err(|e| ViewerError::io(&path, e))?;
    parse_brief(&text)
}

fn read_companion(data_dir: &Path, file: &str) -> ViewerResult<String> {
    let path = data_dir.join(file);
    fs::read_to_string(&path).map_err(|e| ViewerError::io(&path, e))
}

/// Write one page per index entry plus the navigation page.
///
/// Result files are read from `data_dir`. A missing or malformed file only
/// degrades the page of its entry. `data_href` is the location of the data
/// directory relative to `pages_dir`, used for the asset links.
pub fn write_entry_pages(
    document: &IndexDocument,
    data_dir: &Path,
    pages_dir: &Path,
    data_href: &str,
    sink: &mut dyn AssetSink,
) -> ViewerResult<PagesSummary> {
    let mut summary = PagesSummary::default();

    for entry in &document.entries {
        let mut degraded = false;

        let brief = match read_brief(data_dir, entry) {
            Ok(brief) => Some(brief),
            Err(e) => {
                warn!(key = %entry.key, error = %e, "brief document unavailable for page");
                degraded = true;
                None
            }
        };

        let companion = match entry.file_companion.as_deref() {
            Some(file) => match read_companion(data_dir, file) {
                Ok(md) => Some(md),
                Err(e) => {
                    warn!(key = %entry.key, error = %e, "companion report unavailable for page");
                    degraded = true;
                    None
                }
            },
            None => None,
        };

        let html = render_entry_page(entry, brief.as_ref(), companion.as_deref(), data_href);
        let dest = pages_dir.join(page_file_name(&entry.key));
        match sink.write_file(&dest, html.as_bytes()) {
            Ok(()) => {
                debug!(key = %entry.key, path = %dest.display(), "wrote entry page");
                summary.written += 1;
                if degraded {
                    summary.degraded += 1;
                }
            }
            Err(e) => {
                warn!(key = %entry.key, error = %e, "failed to write entry page");
                summary.failed += 1;
            }
        }
    }

    let nav = render_nav_page(document);
    sink.write_file(&pages_dir.join(NAV_PAGE), nav.as_bytes())?;

    Ok(summary)
}
