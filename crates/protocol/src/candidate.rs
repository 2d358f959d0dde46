use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Non-empty notice that a candidate is synthesized, not attested.
///
/// Construction and deserialization both reject blank text, so a
/// [`Candidate`] without a caution cannot exist.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Caution(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCaution;

impl fmt::Display for EmptyCaution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("caution must not be empty")
    }
}

impl std::error::Error for EmptyCaution {}

impl Caution {
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyCaution> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyCaution);
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Caution {
    type Error = EmptyCaution;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Caution> for String {
    fn from(value: Caution) -> Self {
        value.0
    }
}

impl fmt::Display for Caution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct MorphemeGloss {
    pub piece: String,
    pub gloss: String,
}

/// A proposed, unattested word for a concept.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct Candidate {
    pub word: String,
    #[serde(default)]
    pub breakdown: Vec<MorphemeGloss>,
    #[serde(default)]
    pub explanation: String,
    #[schemars(with = "String")]
    pub caution: Caution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_caution_is_rejected() {
        assert_eq!(Caution::new("   "), Err(EmptyCaution));
        assert!(Caution::new("Check with Elders.").is_ok());
    }

    #[test]
    fn candidate_without_caution_does_not_deserialize() {
        let missing = r#"{"word": "x", "breakdown": [], "explanation": ""}"#;
        assert!(serde_json::from_str::<Candidate>(missing).is_err());

        let blank = r#"{"word": "x", "caution": ""}"#;
        assert!(serde_json::from_str::<Candidate>(blank).is_err());
    }

    #[test]
    fn caution_serializes_as_plain_string() {
        let candidate = Candidate {
            word: "tke'kewe'kn".to_string(),
            breakdown: Vec::new(),
            explanation: String::new(),
            caution: Caution::new("Prototype only.").expect("caution"),
        };
        let value = serde_json::to_value(&candidate).expect("json");
        assert_eq!(value["caution"], "Prototype only.");
    }
}
