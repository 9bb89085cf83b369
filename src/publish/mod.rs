//! Publishing: mirror raw results and code snippets into the asset area.

pub mod mirror;
pub mod sink;

pub use mirror::{
    CodeMirrorOptions, MirrorSummary, find_code_snippets, highlight_file_name,
    mirror_code_snippets, mirror_results,
};
pub use sink::{AssetSink, FsSink, MemorySink};
