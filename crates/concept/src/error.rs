use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConceptError>;

#[derive(Error, Debug)]
pub enum ConceptError {
    #[error("Failed to read rule file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule table '{name}' is not valid JSON/TOML: {message}")]
    Parse { name: String, message: String },

    #[error("Rule table schema_version {0} is not supported (expected 1)")]
    UnsupportedSchema(u32),

    #[error("Concept rule #{index} is invalid: {reason}")]
    InvalidRule { index: usize, reason: String },

    #[error("Rule table must end with a fallback rule (a rule with no triggers)")]
    MissingFallback,
}
