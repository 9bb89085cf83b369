//! Brief result document and index document schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mean time statistics for a single benchmark case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Statistics {
    /// Mean time per operation in nanoseconds
    #[serde(default)]
    pub mean: Option<f64>,
}

/// Memory diagnoser output for a single benchmark case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryStats {
    #[serde(default)]
    pub bytes_allocated_per_operation: Option<u64>,
}

/// One benchmark case from a brief result document.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkEntry {
    #[serde(default)]
    pub display_info: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub method_title: Option<String>,
    #[serde(default)]
    pub parameters: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub memory: Option<MemoryStats>,
}

/// Brief result document (`*-report-brief-compressed.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BriefDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub host_environment_info: Option<Map<String, Value>>,
    #[serde(default)]
    pub benchmarks: Option<Vec<BenchmarkEntry>>,
}

impl BriefDocument {
    /// Benchmark entries, empty when the document declares none.
    pub fn entries(&self) -> &[BenchmarkEntry] {
        self.benchmarks.as_deref().unwrap_or_default()
    }
}

/// One result in the aggregate index.
///
/// `fileFull`/`pathFull` and the companion fields serialize as `null` when the
/// sibling file does not exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Stable routing identifier derived from the file names
    pub key: String,
    pub title: String,
    /// Index build time (not benchmark run time)
    pub date: String,
    pub file_brief: String,
    pub file_full: Option<String>,
    pub path_brief: String,
    pub path_full: Option<String>,
    /// Lower-cased search string
    pub keywords: String,
    /// Distinct type names in first-seen order
    pub types: Vec<String>,
    #[serde(rename = "fileGithubMd", default)]
    pub file_companion: Option<String>,
    #[serde(rename = "pathGithubMd", default)]
    pub path_companion: Option<String>,
}

/// The aggregate index written as `index.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub generated_at: String,
    pub entries: Vec<IndexEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_document_ignores_unknown_fields() {
        let json = r#"{
            "Title": "Foo-20240101",
            "Unrelated": 42,
            "Benchmarks": [
                {"Type": "ForeachBenchmarks", "Method": "ForeachArray", "Extra": [1, 2],
                 "Statistics": {"Mean": 1234.5, "Median": 1200.0},
                 "Memory": {"Gen0Collections": 0, "BytesAllocatedPerOperation": 32}}
            ]
        }"#;
        let doc: BriefDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Foo-20240101"));
        assert_eq!(doc.entries().len(), 1);
        let entry = &doc.entries()[0];
        assert_eq!(entry.r#type.as_deref(), Some("ForeachBenchmarks"));
        assert_eq!(entry.statistics.as_ref().and_then(|s| s.mean), Some(1234.5));
        assert_eq!(
            entry.memory.as_ref().and_then(|m| m.bytes_allocated_per_operation),
            Some(32)
        );
    }

    #[test]
    fn test_brief_document_all_fields_optional() {
        let doc: BriefDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.title.is_none());
        assert!(doc.entries().is_empty());

        let doc: BriefDocument = serde_json::from_str(r#"{"Benchmarks": null}"#).unwrap();
        assert!(doc.entries().is_empty());
    }

    #[test]
    fn test_index_entry_absent_siblings_serialize_as_null() {
        let entry = IndexEntry {
            key: "Foo".to_string(),
            title: "Foo".to_string(),
            date: "2024-01-15T12:00:00Z".to_string(),
            file_brief: "Foo-report-brief-compressed.json".to_string(),
            file_full: None,
            path_brief: "data/Foo-report-brief-compressed.json".to_string(),
            path_full: None,
            keywords: "foo".to_string(),
            types: vec![],
            file_companion: None,
            path_companion: None,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"fileFull\":null"));
        assert!(json.contains("\"pathFull\":null"));
        assert!(json.contains("\"pathGithubMd\":null"));
        assert!(json.contains("\"fileBrief\":\"Foo-report-brief-compressed.json\""));
    }

    #[test]
    fn test_index_document_uses_generated_at_key() {
        let doc = IndexDocument {
            generated_at: "2024-01-15T12:00:00Z".to_string(),
            entries: vec![],
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"generatedAt":"2024-01-15T12:00:00Z","entries":[]}"#);
    }
}
