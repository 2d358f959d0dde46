//! Result shapes shared by the lexicon, the concept synthesizer and whatever
//! renders their output.
//!
//! The rendering side only ever branches on two shapes: [`LookupResult`]
//! (by `origin`) and [`ConceptResult`] (always at least one candidate).

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod candidate;
mod document;
mod entry;

pub use candidate::{Candidate, Caution, EmptyCaution, MorphemeGloss};
pub use document::parse_document;
pub use entry::{Animacy, Example, LexicalEntry, Morpheme};

/// Version accepted in the `schema_version` field of lexicon and rule documents.
pub const DATA_SCHEMA_VERSION: u32 = 1;

/// Guidance attached to every lookup that misses the lexicon.
pub const UNKNOWN_WORD_MESSAGE: &str =
    "This word is not in the lexicon yet. Please ask a fluent speaker or an Elder.";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Surface,
    Lemma,
    Gloss,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum LookupResult {
    Lexicon {
        query: String,
        matched_on: MatchField,
        entry: LexicalEntry,
    },
    Unknown {
        /// The query exactly as typed.
        word: String,
        message: String,
    },
}

impl LookupResult {
    #[must_use]
    pub fn unknown(word: &str) -> Self {
        Self::Unknown {
            word: word.to_string(),
            message: UNKNOWN_WORD_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn entry(&self) -> Option<&LexicalEntry> {
        match self {
            Self::Lexicon { entry, .. } => Some(entry),
            Self::Unknown { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Lexicon { .. })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ConceptResult {
    pub concept: String,
    #[serde(default)]
    pub purpose: String,
    /// Id of the rule that produced the candidates.
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
    pub fallback: bool,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SentenceAnalysis {
    pub sentence: String,
    pub tokens: Vec<String>,
    pub analyses: Vec<LookupResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ReviewItem {
    pub lemma: String,
    pub display_form: String,
    pub needs_review: bool,
    pub incomplete_fields: Vec<String>,
}

impl ReviewItem {
    #[must_use]
    pub fn from_entry(entry: &LexicalEntry) -> Self {
        Self {
            lemma: entry.lemma.clone(),
            display_form: entry.display_form().to_string(),
            needs_review: entry.needs_review,
            incomplete_fields: entry
                .incomplete_fields()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Outcome {
    Lexical(LookupResult),
    Concept(ConceptResult),
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

pub fn serialize_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let raw = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(raw)
}
