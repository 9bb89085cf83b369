pub mod artifacts;
pub mod config;
pub mod core;
pub mod highlight;
pub mod ingest;
pub mod pages;
pub mod publish;
pub mod render;

pub mod ingest_cmd;
pub mod pages_cmd;
pub mod render_cmd;
pub mod scan_cmd;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("{0}")]
    Message(String),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl ViewerError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ViewerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ViewerResult<T> = Result<T, ViewerError>;

/// Current UTC time as an RFC 3339 string.
pub fn now_string() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}
