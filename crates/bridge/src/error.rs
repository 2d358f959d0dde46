use lnu_concept::ConceptError;
use lnu_lexicon::LexiconError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid mode '{0}' (expected 'lexical' or 'concept')")]
    InvalidMode(String),

    #[error(transparent)]
    Lexicon(LexiconError),

    #[error(transparent)]
    Concept(#[from] ConceptError),
}

impl From<LexiconError> for BridgeError {
    fn from(err: LexiconError) -> Self {
        match err {
            LexiconError::EmptyQuery => Self::EmptyInput,
            other => Self::Lexicon(other),
        }
    }
}

impl BridgeError {
    /// Stable machine-readable code for envelopes.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidMode(_) => "invalid_mode",
            Self::Lexicon(_) => "lexicon",
            Self::Concept(_) => "concept",
        }
    }

    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => Some("Type a word or describe a concept."),
            Self::InvalidMode(_) => Some("Use mode 'lexical' or 'concept'."),
            Self::Lexicon(_) | Self::Concept(_) => None,
        }
    }
}
