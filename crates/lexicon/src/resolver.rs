use lnu_protocol::{LookupResult, MatchField};

use crate::error::{LexiconError, Result};
use crate::normalize;
use crate::store::Lexicon;

/// Tiered word lookup over a borrowed [`Lexicon`].
///
/// A miss is a normal [`LookupResult::Unknown`], never an error; only a
/// blank query is rejected.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Resolves a Mi'kmaw word: exact `surface` first, then exact `lemma`.
    pub fn explain(&self, query: &str) -> Result<LookupResult> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return Err(LexiconError::EmptyQuery);
        }
        Ok(self.resolve_normalized(query, &normalized))
    }

    /// English reverse lookup: exact gloss first, then the first gloss that
    /// contains the query.
    pub fn explain_gloss(&self, query: &str) -> Result<LookupResult> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return Err(LexiconError::EmptyQuery);
        }

        let hit = self
            .lexicon
            .find(MatchField::Gloss, &normalized)
            .or_else(|| self.lexicon.find_containing(MatchField::Gloss, &normalized));

        Ok(match hit {
            Some(entry) => {
                log::debug!("gloss '{normalized}' resolved to '{}'", entry.lemma);
                LookupResult::Lexicon {
                    query: query.to_string(),
                    matched_on: MatchField::Gloss,
                    entry: entry.clone(),
                }
            }
            None => LookupResult::unknown(query),
        })
    }

    pub(crate) fn resolve_normalized(&self, query: &str, normalized: &str) -> LookupResult {
        for field in [MatchField::Surface, MatchField::Lemma] {
            if let Some(entry) = self.lexicon.find(field, normalized) {
                log::debug!("'{normalized}' matched {field:?} of '{}'", entry.lemma);
                return LookupResult::Lexicon {
                    query: query.to_string(),
                    matched_on: field,
                    entry: entry.clone(),
                };
            }
        }
        log::debug!("'{normalized}' not found in lexicon '{}'", self.lexicon.name());
        LookupResult::unknown(query)
    }
}
