//! Classify result files by naming convention and group them by key.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ViewerError, ViewerResult};

const BRIEF_SUFFIX: &str = "-report-brief-compressed.json";
const FULL_SUFFIX: &str = "-report-full-compressed.json";
const COMPANION_SUFFIX: &str = "-report-github.md";

/// Role a file plays within one logical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRole {
    Brief,
    Full,
    Companion,
}

impl ArtifactRole {
    /// Classification order. Brief is checked first so it wins any ambiguity.
    const ALL: [ArtifactRole; 3] = [
        ArtifactRole::Brief,
        ArtifactRole::Full,
        ArtifactRole::Companion,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactRole::Brief => BRIEF_SUFFIX,
            ArtifactRole::Full => FULL_SUFFIX,
            ArtifactRole::Companion => COMPANION_SUFFIX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactRole::Brief => "brief",
            ArtifactRole::Full => "full",
            ArtifactRole::Companion => "companion",
        }
    }
}

/// A classified file in the artifact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub key: String,
    pub role: ArtifactRole,
    pub file_name: String,
    pub path: PathBuf,
}

/// Files sharing one key, anchored by a brief document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub key: String,
    pub brief: ArtifactFile,
    pub full: Option<ArtifactFile>,
    pub companion: Option<ArtifactFile>,
}

/// Result of scanning an artifact directory.
#[derive(Debug, Clone, Default)]
pub struct ArtifactScan {
    /// One group per key with a brief file, in scan order of the brief files
    pub groups: Vec<ResultGroup>,
    /// Full/companion files whose key has no brief file
    pub orphans: Vec<ArtifactFile>,
    /// `.json` files matching no known suffix
    pub ignored: Vec<String>,
}

impl ArtifactScan {
    pub fn group(&self, key: &str) -> Option<&ResultGroup> {
        self.groups.iter().find(|g| g.key == key)
    }
}

/// Strip `suffix` from the end of `name`, comparing ASCII case-insensitively.
fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Derive `(key, role)` from a file name.
///
/// Returns `None` for names matching no known suffix, including generic
/// `.json` files, and for names that would produce an empty key.
pub fn classify_file_name(name: &str) -> Option<(String, ArtifactRole)> {
    ArtifactRole::ALL.iter().find_map(|&role| {
        strip_suffix_ignore_case(name, role.suffix())
            .filter(|key| !key.is_empty())
            .map(|key| (key.to_string(), role))
    })
}

fn is_json_name(name: &str) -> bool {
    strip_suffix_ignore_case(name, ".json").is_some()
}

/// List regular files in `dir`, sorted by file name.
///
/// Any directory-level I/O failure aborts the scan.
fn list_file_names(dir: &Path) -> ViewerResult<Vec<(String, PathBuf)>> {
    let read_dir = fs::read_dir(dir).map_err(|e| ViewerError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ViewerError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => files.push((name, path)),
            Err(raw) => debug!(name = ?raw, "skipping non-UTF-8 file name"),
        }
    }

    // Sorted so that repeated builds over the same directory are identical
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Scan an artifact directory and group classified files by key.
pub fn scan_artifacts(dir: &Path) -> ViewerResult<ArtifactScan> {
    let files = list_file_names(dir)?;

    let mut scan = ArtifactScan::default();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut siblings: Vec<ArtifactFile> = Vec::new();

    for (file_name, path) in files {
        let Some((key, role)) = classify_file_name(&file_name) else {
            if is_json_name(&file_name) {
                debug!(file = %file_name, "ignoring unclassified json file");
                scan.ignored.push(file_name);
            }
            continue;
        };

        let file = ArtifactFile {
            key: key.clone(),
            role,
            file_name,
            path,
        };

        if role != ArtifactRole::Brief {
            siblings.push(file);
            continue;
        }

        match positions.get(&key) {
            Some(&idx) => {
                debug!(key = %key, file = %file.file_name, "replacing duplicate brief file");
                scan.groups[idx].brief = file;
            }
            None => {
                positions.insert(key.clone(), scan.groups.len());
                scan.groups.push(ResultGroup {
                    key,
                    brief: file,
                    full: None,
                    companion: None,
                });
            }
        }
    }

    for file in siblings {
        let Some(&idx) = positions.get(&file.key) else {
            debug!(key = %file.key, role = file.role.as_str(), "no brief file for key");
            scan.orphans.push(file);
            continue;
        };
        let group = &mut scan.groups[idx];
        match file.role {
            ArtifactRole::Full => group.full = Some(file),
            ArtifactRole::Companion => group.companion = Some(file),
            ArtifactRole::Brief => {}
        }
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"{}").unwrap();
    }

    #[test]
    fn test_classify_brief_full_companion() {
        assert_eq!(
            classify_file_name("Foo.Bar-report-brief-compressed.json"),
            Some(("Foo.Bar".to_string(), ArtifactRole::Brief))
        );
        assert_eq!(
            classify_file_name("Foo.Bar-report-full-compressed.json"),
            Some(("Foo.Bar".to_string(), ArtifactRole::Full))
        );
        assert_eq!(
            classify_file_name("Foo.Bar-report-github.md"),
            Some(("Foo.Bar".to_string(), ArtifactRole::Companion))
        );
    }

    #[test]
    fn test_classify_ignores_generic_json() {
        assert_eq!(classify_file_name("Foo.json"), None);
        assert_eq!(classify_file_name("Foo-report.json"), None);
        assert_eq!(classify_file_name("Foo-report.html"), None);
        assert_eq!(classify_file_name("Foo-report-github.markdown"), None);
    }

    #[test]
    fn test_classify_extension_case_insensitive() {
        assert_eq!(
            classify_file_name("Foo-report-brief-compressed.JSON"),
            Some(("Foo".to_string(), ArtifactRole::Brief))
        );
        assert_eq!(
            classify_file_name("Foo-report-github.MD"),
            Some(("Foo".to_string(), ArtifactRole::Companion))
        );
    }

    #[test]
    fn test_classify_rejects_empty_key() {
        assert_eq!(classify_file_name("-report-brief-compressed.json"), None);
    }

    #[test]
    fn test_classify_multibyte_name_does_not_panic() {
        assert_eq!(classify_file_name("ベンチ"), None);
        assert_eq!(
            classify_file_name("ベンチ-report-github.md"),
            Some(("ベンチ".to_string(), ArtifactRole::Companion))
        );
    }

    #[test]
    fn test_scan_groups_by_key() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "B-report-brief-compressed.json");
        touch(temp.path(), "A-report-full-compressed.json");
        touch(temp.path(), "A-report-brief-compressed.json");
        touch(temp.path(), "A-report-github.md");
        touch(temp.path(), "C-report-full-compressed.json");
        touch(temp.path(), "stray.json");
        touch(temp.path(), "notes.txt");
        fs::create_dir(temp.path().join("nested-report-brief-compressed.json")).unwrap();

        let scan = scan_artifacts(temp.path()).unwrap();

        let keys: Vec<&str> = scan.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);

        let a = scan.group("A").unwrap();
        assert_eq!(a.brief.file_name, "A-report-brief-compressed.json");
        assert_eq!(
            a.full.as_ref().map(|f| f.file_name.as_str()),
            Some("A-report-full-compressed.json")
        );
        assert_eq!(
            a.companion.as_ref().map(|f| f.file_name.as_str()),
            Some("A-report-github.md")
        );

        let b = scan.group("B").unwrap();
        assert!(b.full.is_none());
        assert!(b.companion.is_none());

        assert_eq!(scan.orphans.len(), 1);
        assert_eq!(scan.orphans[0].key, "C");
        assert_eq!(scan.ignored, vec!["stray.json".to_string()]);
    }

    #[test]
    fn test_scan_missing_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = scan_artifacts(&missing).unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }
}
