//! Ingestion: normalize brief documents and aggregate them into the index.

pub mod build;
pub mod normalize;

pub use build::{
    IndexBuild, asset_href, build_entry, build_index, load_brief, read_index_json,
    write_index_json,
};
pub use normalize::{
    build_keywords, distinct_types, extract_title, parse_brief, strip_single_quotes,
};
