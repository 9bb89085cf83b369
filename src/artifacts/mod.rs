//! Artifact directory scanning.
//!
//! Result files are classified purely by file name: a brief document, an
//! optional full document and an optional companion report share one key.

pub mod scanner;

pub use scanner::{
    ArtifactFile, ArtifactRole, ArtifactScan, ResultGroup, classify_file_name, scan_artifacts,
};
