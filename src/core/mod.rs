//! Core types for bench-viewer.
//!
//! This module holds the brief result document shape as emitted by the
//! benchmark runner and the derived index document written by ingestion.

pub mod schema;

// Re-export key types for convenience
pub use schema::{
    BenchmarkEntry, BriefDocument, IndexDocument, IndexEntry, MemoryStats, Statistics,
};
