//! Configuration loaded from `bench-viewer.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::highlight::{CommandHighlighter, DEFAULT_THEME, Highlighter, SyntectHighlighter};
use crate::{ViewerError, ViewerResult};

pub const DEFAULT_CONFIG: &str = "bench-viewer.toml";

/// Ingestion settings. Every key is optional in the file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory the benchmark runner writes results to
    pub artifacts_dir: PathBuf,
    /// Publish area for mirrored result files and `index.json`
    pub data_dir: PathBuf,
    /// Prefix for the relative asset paths stored in the index
    pub data_href_prefix: String,
    /// Benchmark source directory
    pub code_src_dir: PathBuf,
    /// Publish area for code snippets and their highlighted renderings
    pub code_dir: PathBuf,
    pub code_extension: String,
    pub code_language: String,
    pub highlight_theme: String,
    /// External highlighter command template (placeholders: {lang},{theme})
    pub highlight_command: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            artifacts_dir: PathBuf::from("BenchmarkDotNet.Artifacts/results"),
            data_dir: PathBuf::from("public/data"),
            data_href_prefix: "data".to_string(),
            code_src_dir: PathBuf::from("src/Benchmarks"),
            code_dir: PathBuf::from("public/code"),
            code_extension: "cs".to_string(),
            code_language: "cs".to_string(),
            highlight_theme: DEFAULT_THEME.to_string(),
            highlight_command: None,
        }
    }
}

impl ViewerConfig {
    /// Path of the index document inside the data directory.
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join("index.json")
    }

    /// Build the configured highlighter.
    pub fn highlighter(&self) -> Box<dyn Highlighter> {
        match &self.highlight_command {
            Some(tpl) if !tpl.trim().is_empty() => Box::new(CommandHighlighter::new(tpl.clone())),
            _ => Box::new(SyntectHighlighter::new()),
        }
    }
}

pub fn parse_config(s: &str) -> ViewerResult<ViewerConfig> {
    toml::from_str(s).map_err(|e| ViewerError::Message(format!("failed to parse config: {e}")))
}

/// Load configuration.
///
/// An explicitly given path must exist. Without one, `bench-viewer.toml` in
/// the working directory is used when present, else the defaults.
pub fn load_config(path: Option<&Path>) -> ViewerResult<ViewerConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if !default.exists() {
                return Ok(ViewerConfig::default());
            }
            default
        }
    };
    let s = std::fs::read_to_string(path).map_err(|e| ViewerError::io(path, e))?;
    parse_config(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
        assert_eq!(cfg.index_path(), PathBuf::from("public/data/index.json"));
    }

    #[test]
    fn test_partial_config_overrides() {
        let cfg = parse_config(
            r#"
artifacts_dir = "../BenchmarkDotNet.Artifacts/results"
highlight_theme = "InspiredGitHub"
highlight_command = "shiki-cli --lang {lang} --theme {theme}"
"#,
        )
        .unwrap();
        assert_eq!(
            cfg.artifacts_dir,
            PathBuf::from("../BenchmarkDotNet.Artifacts/results")
        );
        assert_eq!(cfg.highlight_theme, "InspiredGitHub");
        assert_eq!(cfg.code_extension, "cs");
        assert_eq!(cfg.highlighter().name(), "command");
    }

    #[test]
    fn test_default_highlighter_is_syntect() {
        assert_eq!(ViewerConfig::default().highlighter().name(), "syntect");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = parse_config("artifacts_dir = 3").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = load_config(Some(&temp.path().join("missing.toml")));
        assert!(result.is_err());
    }
}
