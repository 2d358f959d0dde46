use std::collections::HashSet;
use std::path::Path;

use lnu_protocol::{parse_document, Candidate, DATA_SCHEMA_VERSION};
use serde::Deserialize;

use crate::error::{ConceptError, Result};

const BUILTIN_RULES: &str = include_str!("../../../data/concept_rules.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleTable {
    #[serde(default)]
    schema_version: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    rules: Vec<ConceptRule>,
}

/// One row of the synthesis table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConceptRule {
    pub id: String,
    /// Lowercase substrings; an empty list marks the fallback rule.
    #[serde(default, alias = "triggerKeywords", alias = "trigger_keywords")]
    pub triggers: Vec<String>,
    pub candidate: Candidate,
}

impl ConceptRule {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.triggers.is_empty()
    }

    /// First trigger contained in already-lowercased text. Substring
    /// containment only: "cold" also fires inside "scolding".
    #[must_use]
    pub fn matched_keyword(&self, normalized: &str) -> Option<&str> {
        self.triggers
            .iter()
            .map(String::as_str)
            .find(|keyword| normalized.contains(keyword))
    }
}

/// Ordered rule table ending in exactly one fallback rule.
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: String,
    rules: Vec<ConceptRule>,
}

impl RuleTable {
    /// The seed rules compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_bytes("bundled", BUILTIN_RULES.as_bytes())
            .expect("bundled concept rules must parse")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ConceptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fallback_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("rules");
        Self::from_bytes(fallback_name, &bytes)
    }

    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let raw: RawRuleTable = parse_document(bytes).map_err(|err| ConceptError::Parse {
            name: name.to_string(),
            message: format!("{err:#}"),
        })?;

        if let Some(version) = raw.schema_version {
            if version != DATA_SCHEMA_VERSION {
                return Err(ConceptError::UnsupportedSchema(version));
            }
        }

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| name.to_string());
        Self::from_rules(name, raw.rules)
    }

    /// Validates and normalizes rules: triggers are lowercased, the last
    /// rule must be the only fallback.
    pub fn from_rules(name: impl Into<String>, mut rules: Vec<ConceptRule>) -> Result<Self> {
        let Some(last) = rules.len().checked_sub(1) else {
            return Err(ConceptError::MissingFallback);
        };

        let mut ids = HashSet::new();
        for (index, rule) in rules.iter_mut().enumerate() {
            let invalid = |reason: String| ConceptError::InvalidRule { index, reason };

            rule.id = rule.id.trim().to_string();
            if rule.id.is_empty() {
                return Err(invalid("id must not be empty".to_string()));
            }
            if !ids.insert(rule.id.clone()) {
                return Err(invalid(format!("duplicate id '{}'", rule.id)));
            }

            for keyword in &mut rule.triggers {
                *keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(invalid(format!("rule '{}' has a blank trigger", rule.id)));
                }
            }

            if rule.candidate.word.trim().is_empty() {
                return Err(invalid(format!("rule '{}' has a blank candidate word", rule.id)));
            }

            if rule.is_fallback() && index != last {
                return Err(invalid(format!(
                    "rule '{}' has no triggers but is not last; it would shadow every later rule",
                    rule.id
                )));
            }
        }

        if !rules[last].is_fallback() {
            return Err(ConceptError::MissingFallback);
        }

        Ok(Self {
            name: name.into(),
            rules,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &[ConceptRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: a validated table holds at least the fallback rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn fallback(&self) -> &ConceptRule {
        // from_rules guarantees a non-empty table ending in the fallback.
        &self.rules[self.rules.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lnu_protocol::Caution;
    use std::io::Write;

    fn rule(id: &str, triggers: &[&str], word: &str) -> ConceptRule {
        ConceptRule {
            id: id.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            candidate: Candidate {
                word: word.to_string(),
                breakdown: Vec::new(),
                explanation: String::new(),
                caution: Caution::new("Check with Elders.").expect("caution"),
            },
        }
    }

    #[test]
    fn bundled_table_ends_with_fallback() {
        let table = RuleTable::bundled();
        assert!(table.len() >= 2);
        assert!(table.fallback().is_fallback());
        assert!(table.rules()[..table.len() - 1]
            .iter()
            .all(|r| !r.is_fallback()));
    }

    #[test]
    fn triggers_are_lowercased_at_load() {
        let table = RuleTable::from_rules(
            "test",
            vec![rule("a", &["  Fridge "], "x"), rule("fallback", &[], "y")],
        )
        .expect("table");
        assert_eq!(table.rules()[0].triggers, vec!["fridge".to_string()]);
    }

    #[test]
    fn empty_table_has_no_fallback() {
        let err = RuleTable::from_rules("test", Vec::new()).expect_err("empty");
        assert!(matches!(err, ConceptError::MissingFallback));
    }

    #[test]
    fn last_rule_must_be_fallback() {
        let err = RuleTable::from_rules("test", vec![rule("a", &["cold"], "x")])
            .expect_err("no fallback");
        assert!(matches!(err, ConceptError::MissingFallback));
    }

    #[test]
    fn fallback_before_the_end_is_rejected() {
        let err = RuleTable::from_rules(
            "test",
            vec![rule("early", &[], "x"), rule("fallback", &[], "y")],
        )
        .expect_err("shadowing fallback");
        assert!(matches!(err, ConceptError::InvalidRule { index: 0, .. }));
    }

    #[test]
    fn blank_triggers_and_duplicate_ids_are_rejected() {
        let err = RuleTable::from_rules(
            "test",
            vec![rule("a", &["cold", "  "], "x"), rule("fallback", &[], "y")],
        )
        .expect_err("blank trigger");
        assert!(matches!(err, ConceptError::InvalidRule { index: 0, .. }));

        let err = RuleTable::from_rules(
            "test",
            vec![rule("a", &["cold"], "x"), rule("a", &[], "y")],
        )
        .expect_err("duplicate id");
        assert!(matches!(err, ConceptError::InvalidRule { index: 1, .. }));
    }

    #[test]
    fn candidate_without_caution_fails_to_parse() {
        let raw = br#"{
            "schema_version": 1,
            "rules": [
                {"id": "fallback", "triggers": [], "candidate": {"word": "x", "caution": " "}}
            ]
        }"#;
        let err = RuleTable::from_bytes("bad", raw).expect_err("blank caution");
        assert!(matches!(err, ConceptError::Parse { .. }));
    }

    #[test]
    fn loads_toml_rules_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        write!(
            file,
            r#"
schema_version = 1
name = "toml-rules"

[[rules]]
id = "cold"
triggers = ["COLD"]

[rules.candidate]
word = "tke'kewe'kn"
caution = "Prototype only."

[[rules]]
id = "fallback"

[rules.candidate]
word = "apoqnmatimkewey-a'tikn"
caution = "Generic placeholder."
"#
        )
        .expect("write");

        let table = RuleTable::from_file(file.path()).expect("table");
        assert_eq!(table.name(), "toml-rules");
        assert_eq!(table.rules()[0].matched_keyword("so cold"), Some("cold"));
        assert!(table.fallback().is_fallback());
    }

    #[test]
    fn missing_schema_version_reads_as_current() {
        let raw = br#"{"rules": [{"id": "fallback", "candidate": {"word": "x", "caution": "c"}}]}"#;
        let table = RuleTable::from_bytes("unversioned", raw).expect("table");
        assert_eq!(table.name(), "unversioned");
        assert!(table.fallback().is_fallback());
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let err = RuleTable::from_bytes("v9", br#"{"schema_version": 9, "rules": []}"#)
            .expect_err("schema");
        assert!(matches!(err, ConceptError::UnsupportedSchema(9)));
    }
}
