use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaxonomyError>;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Taxonomy is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Taxonomy contains an empty concept tag")]
    EmptyTag,

    #[error("Duplicate concept tag '{tag}'")]
    DuplicateTag { tag: String },

    #[error("Concept tag '{tag}' has no synonym tokens")]
    EmptyGroup { tag: String },

    #[error("Concept tag '{tag}' contains an empty synonym token")]
    EmptyToken { tag: String },

    #[error("Concept tag '{tag}' token '{token}' must be lowercase with no separators")]
    UnnormalizedToken { tag: String, token: String },
}
