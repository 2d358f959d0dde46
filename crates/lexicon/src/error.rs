use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Failed to read lexicon file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lexicon '{name}' is not valid JSON/TOML: {message}")]
    Parse { name: String, message: String },

    #[error("Lexicon schema_version {0} is not supported (expected 1)")]
    UnsupportedSchema(u32),

    #[error("Lexicon entry #{index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },
}
