use std::collections::HashMap;
use std::path::Path;

use lnu_protocol::{parse_document, LexicalEntry, MatchField, ReviewItem, DATA_SCHEMA_VERSION};
use serde::Deserialize;

use crate::error::{LexiconError, Result};
use crate::normalize;
use crate::sentence::{phrase_key, tokenize};

const BUILTIN_LEXICON: &str = include_str!("../../../data/lexicon.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLexicon {
    #[serde(default)]
    schema_version: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    entries: Vec<LexicalEntry>,
}

/// Ordered, read-only collection of lexical entries.
///
/// Scans are linear and first-match: when two entries share a normalized key,
/// the one that appears earlier in the source document always wins.
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    entries: Vec<LexicalEntry>,
    max_phrase_words: usize,
}

impl Lexicon {
    /// The seed lexicon compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_bytes("bundled", BUILTIN_LEXICON.as_bytes())
            .expect("bundled lexicon must parse")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fallback_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("lexicon");
        Self::from_bytes(fallback_name, &bytes)
    }

    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let raw: RawLexicon = parse_document(bytes).map_err(|err| LexiconError::Parse {
            name: name.to_string(),
            message: format!("{err:#}"),
        })?;

        if let Some(version) = raw.schema_version {
            if version != DATA_SCHEMA_VERSION {
                return Err(LexiconError::UnsupportedSchema(version));
            }
        }

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| name.to_string());
        Self::from_entries(name, raw.entries)
    }

    /// Builds a lexicon from already-parsed entries, validating each one.
    pub fn from_entries(name: impl Into<String>, entries: Vec<LexicalEntry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(index, entry)?;
        }
        warn_on_suspicious_entries(&entries);

        let max_phrase_words = entries
            .iter()
            .flat_map(|e| [e.surface.as_deref(), Some(e.lemma.as_str())])
            .flatten()
            .filter_map(reachable_phrase_len)
            .max()
            .unwrap_or(1)
            .max(1);

        let lexicon = Self {
            name: name.into(),
            entries,
            max_phrase_words,
        };
        log::debug!(
            "Loaded lexicon '{}' with {} entries",
            lexicon.name,
            lexicon.entries.len()
        );
        Ok(lexicon)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest surface/lemma key, in tokens, that a tokenized sentence can
    /// rebuild. Keys with punctuation such as "Kataq (yellow stage)" never
    /// count.
    #[must_use]
    pub const fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Exact, case-insensitive match against `surface`, then `lemma`.
    ///
    /// Blank queries return `None` without scanning.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&LexicalEntry> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }
        self.find(MatchField::Surface, &normalized)
            .or_else(|| self.find(MatchField::Lemma, &normalized))
    }

    /// First entry whose `field` equals an already-normalized key.
    #[must_use]
    pub fn find(&self, field: MatchField, normalized: &str) -> Option<&LexicalEntry> {
        self.entries
            .iter()
            .find(|entry| field_value(entry, field).is_some_and(|v| normalize(v) == normalized))
    }

    /// First entry whose `field` contains an already-normalized needle.
    #[must_use]
    pub fn find_containing(&self, field: MatchField, needle: &str) -> Option<&LexicalEntry> {
        self.entries
            .iter()
            .find(|entry| field_value(entry, field).is_some_and(|v| normalize(v).contains(needle)))
    }

    /// Entries whose analysis is provisional or structurally incomplete.
    #[must_use]
    pub fn review_queue(&self) -> Vec<ReviewItem> {
        self.entries
            .iter()
            .filter(|entry| entry.needs_review || entry.is_incomplete())
            .map(ReviewItem::from_entry)
            .collect()
    }
}

fn field_value(entry: &LexicalEntry, field: MatchField) -> Option<&str> {
    match field {
        MatchField::Surface => entry.surface.as_deref(),
        MatchField::Lemma => Some(entry.lemma.as_str()),
        MatchField::Gloss => Some(entry.gloss.as_str()),
    }
}

fn reachable_phrase_len(key: &str) -> Option<usize> {
    let tokens = tokenize(key);
    let rebuilt = phrase_key(&tokens.join(" "));
    (!tokens.is_empty() && rebuilt == phrase_key(key)).then_some(tokens.len())
}

fn validate_entry(index: usize, entry: &LexicalEntry) -> Result<()> {
    if entry.lemma.trim().is_empty() {
        return Err(LexiconError::InvalidEntry {
            index,
            reason: "lemma must not be empty".to_string(),
        });
    }
    if entry.gloss.trim().is_empty() {
        return Err(LexiconError::InvalidEntry {
            index,
            reason: format!("gloss must not be empty (lemma '{}')", entry.lemma),
        });
    }
    Ok(())
}

fn warn_on_suspicious_entries(entries: &[LexicalEntry]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, entry) in entries.iter().enumerate() {
        for key in [entry.surface.as_deref(), Some(entry.lemma.as_str())]
            .into_iter()
            .flatten()
        {
            let key = normalize(key);
            if key.is_empty() {
                continue;
            }
            match seen.get(&key) {
                Some(&first) if first != index => log::warn!(
                    "Lexicon key '{key}' appears in entries #{first} and #{index}; #{first} wins"
                ),
                Some(_) => {}
                None => {
                    seen.insert(key, index);
                }
            }
        }

        if entry.is_incomplete() && !entry.needs_review {
            log::warn!(
                "Lexicon entry '{}' is incomplete ({}) but not marked for review",
                entry.lemma,
                entry.incomplete_fields().join(", ")
            );
        }
    }
}
