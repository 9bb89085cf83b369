//! Build the aggregate index from scanned result groups.
//!
//! One entry is derived per key whose brief document reads and parses. Keys
//! with a malformed brief are logged and skipped; they never abort the build.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::artifacts::{ArtifactScan, ResultGroup};
use crate::core::schema::{BriefDocument, IndexDocument, IndexEntry};
use crate::publish::AssetSink;
use crate::{ViewerError, ViewerResult};

use super::normalize::{build_keywords, distinct_types, extract_title, parse_brief};

/// Output of an index build.
#[derive(Debug, Clone)]
pub struct IndexBuild {
    pub document: IndexDocument,
    /// Groups that produced an entry, in index order
    pub indexed: Vec<ResultGroup>,
    /// Keys skipped because their brief document could not be read or parsed
    pub skipped: Vec<String>,
}

/// Relative href for a published asset.
///
/// Format: "{prefix}/{file_name}", or just the file name for an empty prefix.
pub fn asset_href(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", prefix, file_name)
    }
}

/// Read and parse the brief document of a group.
pub fn load_brief(group: &ResultGroup) -> ViewerResult<BriefDocument> {
    let text = fs::read_to_string(&group.brief.path)
        .map_err(|e| ViewerError::io(&group.brief.path, e))?;
    parse_brief(&text)
}

/// Derive a single index entry.
pub fn build_entry(
    group: &ResultGroup,
    brief: &BriefDocument,
    date: &str,
    href_prefix: &str,
) -> IndexEntry {
    let title = extract_title(brief, &group.key);
    let keywords = build_keywords(&title, brief);
    let file_full = group.full.as_ref().map(|f| f.file_name.clone());
    let file_companion = group.companion.as_ref().map(|f| f.file_name.clone());

    IndexEntry {
        key: group.key.clone(),
        title,
        date: date.to_string(),
        file_brief: group.brief.file_name.clone(),
        path_brief: asset_href(href_prefix, &group.brief.file_name),
        path_full: file_full.as_deref().map(|f| asset_href(href_prefix, f)),
        file_full,
        keywords,
        types: distinct_types(brief),
        path_companion: file_companion.as_deref().map(|f| asset_href(href_prefix, f)),
        file_companion,
    }
}

/// Build the index document for every group with a valid brief document.
///
/// Entries follow scan order. `generated_at` is stamped on the document and
/// on every entry, so a build over unchanged input with the same timestamp is
/// identical.
pub fn build_index(scan: &ArtifactScan, generated_at: &str, href_prefix: &str) -> IndexBuild {
    let mut entries = Vec::with_capacity(scan.groups.len());
    let mut indexed = Vec::with_capacity(scan.groups.len());
    let mut skipped = Vec::new();

    for group in &scan.groups {
        let brief = match load_brief(group) {
            Ok(brief) => brief,
            Err(e) => {
                warn!(key = %group.key, error = %e, "skipping result with unreadable brief document");
                skipped.push(group.key.clone());
                continue;
            }
        };

        debug!(key = %group.key, benchmarks = brief.entries().len(), "indexed result");
        entries.push(build_entry(group, &brief, generated_at, href_prefix));
        indexed.push(group.clone());
    }

    IndexBuild {
        document: IndexDocument {
            generated_at: generated_at.to_string(),
            entries,
        },
        indexed,
        skipped,
    }
}

/// Serialize the index document and hand it to the sink as one write.
pub fn write_index_json(
    document: &IndexDocument,
    sink: &mut dyn AssetSink,
    output_path: &Path,
) -> ViewerResult<()> {
    let json = serde_json::to_vec_pretty(document)
        .map_err(|e| ViewerError::Message(format!("failed to serialize index: {e}")))?;
    sink.write_file(output_path, &json)
}

/// Read a previously written index document.
pub fn read_index_json(path: &Path) -> ViewerResult<IndexDocument> {
    let text = fs::read_to_string(path).map_err(|e| ViewerError::io(path, e))?;
    serde_json::from_str(&text)
        .map_err(|e| ViewerError::Message(format!("failed to parse {}: {e}", path.display())))
}
