use lnu_protocol::{LookupResult, SentenceAnalysis};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LexiconError, Result};
use crate::normalize;
use crate::resolver::Resolver;

// Apostrophes (straight and curly) mark glottal stops and vowel length, so
// they belong to the word.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}'’\-]+").expect("word regex must compile"));

/// Splits text into word tokens, keeping in-word and trailing apostrophes.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_start_matches(['\'', '’', '-']).trim_end_matches('-'))
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

/// Lookup key for a run of tokens. Curly apostrophes fold to the straight
/// form used by lexicon keys.
pub(crate) fn phrase_key(phrase: &str) -> String {
    normalize(&phrase.replace('’', "'"))
}

impl Resolver<'_> {
    /// Explains each word of a sentence, left to right.
    ///
    /// At every position the longest run of tokens that names a lexicon
    /// entry is consumed; a token that starts no match is reported unknown.
    /// Analyses keep the tokens as typed, curly apostrophes included.
    pub fn explain_sentence(&self, sentence: &str) -> Result<SentenceAnalysis> {
        if sentence.trim().is_empty() {
            return Err(LexiconError::EmptyQuery);
        }

        let tokens = tokenize(sentence);
        let max_words = self.lexicon().max_phrase_words();
        let mut analyses = Vec::new();
        let mut start = 0;

        while start < tokens.len() {
            let longest = max_words.min(tokens.len() - start);
            let hit = (1..=longest).rev().find_map(|len| {
                let phrase = tokens[start..start + len].join(" ");
                let result = self.resolve_normalized(&phrase, &phrase_key(&phrase));
                result.is_known().then_some((len, result))
            });

            match hit {
                Some((len, result)) => {
                    analyses.push(result);
                    start += len;
                }
                None => {
                    analyses.push(LookupResult::unknown(&tokens[start]));
                    start += 1;
                }
            }
        }

        Ok(SentenceAnalysis {
            sentence: sentence.to_string(),
            tokens,
            analyses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Lexicon;
    use lnu_protocol::MatchField;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_keeps_glottal_apostrophes() {
        assert_eq!(
            tokenize("Kwe', teluisi Katew."),
            vec!["Kwe'", "teluisi", "Katew"]
        );
        assert_eq!(
            tokenize("Msit No’kmaq, wela'liek!"),
            vec!["Msit", "No’kmaq", "wela'liek"]
        );
        assert!(tokenize(" ... ").is_empty());
    }

    #[test]
    fn sentence_prefers_longest_phrase() {
        let lexicon = Lexicon::bundled();
        let analysis = Resolver::new(&lexicon)
            .explain_sentence("Wela'lin Msit No'kmaq.")
            .expect("analysis");

        assert_eq!(analysis.tokens.len(), 3);
        assert_eq!(analysis.analyses.len(), 2);
        assert_eq!(
            analysis.analyses[0].entry().map(|e| e.lemma.as_str()),
            Some("wela'lin")
        );
        assert_eq!(
            analysis.analyses[1].entry().map(|e| e.lemma.as_str()),
            Some("msit no'kmaq")
        );
    }

    #[test]
    fn unmatched_tokens_are_reported_one_by_one() {
        let lexicon = Lexicon::bundled();
        let analysis = Resolver::new(&lexicon)
            .explain_sentence("Kwe', teluisi Katew.")
            .expect("analysis");

        assert_eq!(analysis.analyses.len(), 3);
        assert!(matches!(
            &analysis.analyses[0],
            LookupResult::Lexicon {
                matched_on: MatchField::Surface,
                ..
            }
        ));
        assert!(analysis.analyses[1].is_known());
        assert_eq!(analysis.analyses[2], LookupResult::unknown("Katew"));
    }

    #[test]
    fn curly_apostrophes_match_straight_keys() {
        let lexicon = Lexicon::bundled();
        let analysis = Resolver::new(&lexicon)
            .explain_sentence("Kwe’ Msit No’kmaq")
            .expect("analysis");

        assert_eq!(analysis.tokens, vec!["Kwe’", "Msit", "No’kmaq"]);
        assert_eq!(analysis.analyses.len(), 2);
        assert!(analysis.analyses.iter().all(LookupResult::is_known));
        assert_eq!(
            analysis.analyses[1].entry().map(|e| e.lemma.as_str()),
            Some("msit no'kmaq")
        );
        match &analysis.analyses[0] {
            LookupResult::Lexicon { query, .. } => assert_eq!(query, "Kwe’"),
            other => panic!("expected lexicon hit, got {other:?}"),
        }
    }

    #[test]
    fn blank_sentence_is_rejected() {
        let lexicon = Lexicon::bundled();
        assert!(matches!(
            Resolver::new(&lexicon).explain_sentence("  "),
            Err(LexiconError::EmptyQuery)
        ));
    }

    #[test]
    fn punctuation_only_sentence_has_no_tokens() {
        let lexicon = Lexicon::bundled();
        let analysis = Resolver::new(&lexicon).explain_sentence("?!").expect("analysis");
        assert!(analysis.tokens.is_empty());
        assert!(analysis.analyses.is_empty());
    }
}
