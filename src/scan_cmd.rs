//! CLI command handler for `scan`.
//!
//! Dry run of the ingestion scan: shows how each file in the artifacts
//! directory is classified without writing anything.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::ViewerResult;
use crate::artifacts::{ArtifactFile, ArtifactScan, scan_artifacts};

fn push_file(out: &mut String, file: &ArtifactFile) {
    let _ = writeln!(out, "  {:<10} {}", file.role.as_str(), file.file_name);
}

/// Plain-text listing of a scan.
pub fn format_scan(scan: &ArtifactScan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} result(s)", scan.groups.len());
    for group in &scan.groups {
        let _ = writeln!(out, "{}", group.key);
        push_file(&mut out, &group.brief);
        for file in [group.full.as_ref(), group.companion.as_ref()].into_iter().flatten() {
            push_file(&mut out, file);
        }
    }

    if !scan.orphans.is_empty() {
        let _ = writeln!(out, "\norphans (no brief document):");
        for file in &scan.orphans {
            push_file(&mut out, file);
        }
    }

    if !scan.ignored.is_empty() {
        let _ = writeln!(out, "\nignored:");
        for name in &scan.ignored {
            let _ = writeln!(out, "  {}", name);
        }
    }

    out
}

/// Run the `scan` command.
pub fn run(dir: PathBuf) -> ViewerResult<()> {
    let scan = scan_artifacts(&dir)?;
    print!("{}", format_scan(&scan));
    Ok(())
}
