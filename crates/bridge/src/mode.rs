use std::fmt;
use std::str::FromStr;

use crate::error::BridgeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Word lookup against the lexicon.
    Lexical,
    /// Candidate synthesis for a concept.
    Concept,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Concept => "concept",
        }
    }
}

impl FromStr for Mode {
    type Err = BridgeError;

    /// Exact names only; nothing defaults silently.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical" => Ok(Self::Lexical),
            "concept" => Ok(Self::Concept),
            other => Err(BridgeError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
