use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root placeholders used in seed data while the etymology is still unknown.
const ROOT_PLACEHOLDERS: &[&str] = &["todo", "tbd", "?"];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Animacy {
    Animate,
    Inanimate,
}

/// One piece of a left-to-right morpheme decomposition.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct Morpheme {
    pub piece: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gloss: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct Example {
    pub mikmaq: String,
    pub english: String,
}

/// One dictionary item.
///
/// Sequences default to empty when missing from the source data; the engine
/// never fills them in. `needs_review` is carried through untouched so that
/// provisional analyses are always presented as provisional.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct LexicalEntry {
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, alias = "pos", alias = "partOfSpeech")]
    pub part_of_speech: String,
    pub gloss: String,
    #[serde(default)]
    pub animacy: Option<Animacy>,
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub morphology: Vec<Morpheme>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default, alias = "worldviewNotes")]
    pub worldview_notes: Vec<String>,
    #[serde(default, alias = "needsReview")]
    pub needs_review: bool,
    #[serde(default)]
    pub source: String,
}

impl LexicalEntry {
    /// The form shown to users: `surface` when populated, otherwise `lemma`.
    #[must_use]
    pub fn display_form(&self) -> &str {
        self.surface
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.lemma)
    }

    #[must_use]
    pub fn has_placeholder_root(&self) -> bool {
        let root = self.root.trim();
        if root.is_empty() || root.contains('?') {
            return true;
        }
        let lowered = root.to_lowercase();
        ROOT_PLACEHOLDERS.iter().any(|p| lowered == *p)
    }

    /// Structural gaps in the analysis. Reported as-is, never repaired.
    #[must_use]
    pub fn incomplete_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.has_placeholder_root() {
            fields.push("root");
        }
        if self.morphology.is_empty() {
            fields.push("morphology");
        }
        if self.examples.is_empty() {
            fields.push("examples");
        }
        fields
    }

    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.has_placeholder_root() || self.morphology.is_empty()
    }
}
