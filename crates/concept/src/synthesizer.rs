use lnu_protocol::ConceptResult;

use crate::rules::RuleTable;

/// Proposes candidate words for a concept using the first matching rule.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    rules: &'a RuleTable,
}

impl<'a> Synthesizer<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Scans `concept + " " + purpose` (lowercased) against the rules in
    /// order. Rule order is the only tie-break; the trailing fallback rule
    /// fires when nothing else does, so the result is never empty.
    #[must_use]
    pub fn synthesize(&self, concept: &str, purpose: &str) -> ConceptResult {
        let normalized = format!("{concept} {purpose}").to_lowercase();

        let (rule, matched_keyword) = self
            .rules
            .rules()
            .iter()
            .find_map(|rule| {
                rule.matched_keyword(&normalized)
                    .map(|keyword| (rule, Some(keyword.to_string())))
            })
            .unwrap_or_else(|| (self.rules.fallback(), None));

        let fallback = rule.is_fallback();
        if fallback {
            log::debug!("no concept rule matched '{}'; using fallback", normalized.trim());
        } else {
            log::debug!(
                "concept rule '{}' matched keyword {:?}",
                rule.id,
                matched_keyword.as_deref().unwrap_or_default()
            );
        }

        ConceptResult {
            concept: concept.to_string(),
            purpose: purpose.to_string(),
            rule: rule.id.clone(),
            matched_keyword,
            fallback,
            candidates: vec![rule.candidate.clone()],
        }
    }
}
