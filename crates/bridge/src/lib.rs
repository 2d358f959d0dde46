//! # Lnu Bridge
//!
//! Single entry point for the rendering layer: owns the loaded lexicon and
//! concept rules and dispatches `(mode, query, purpose)` requests.
//!
//! ```text
//! (mode, query, purpose)
//!     │
//!     ├──> blank query ─────────> BridgeError::EmptyInput
//!     ├──> mode = lexical ──────> Resolver::explain     -> Outcome::Lexical
//!     ├──> mode = concept ──────> Synthesizer::synthesize -> Outcome::Concept
//!     └──> any other mode ──────> BridgeError::InvalidMode
//! ```

use std::path::Path;

use lnu_concept::{RuleTable, Synthesizer};
use lnu_lexicon::{Lexicon, Resolver};
use lnu_protocol::{ConceptResult, LookupResult, Outcome, ReviewItem, SentenceAnalysis};

mod error;
mod mode;

pub use error::{BridgeError, Result};
pub use mode::Mode;

/// Process-lifetime owner of the immutable lexicon and rule table.
#[derive(Debug, Clone)]
pub struct Bridge {
    lexicon: Lexicon,
    rules: RuleTable,
}

impl Bridge {
    #[must_use]
    pub const fn new(lexicon: Lexicon, rules: RuleTable) -> Self {
        Self { lexicon, rules }
    }

    /// Bundled lexicon and rules.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Lexicon::bundled(), RuleTable::bundled())
    }

    /// Loads each table from its file when given, otherwise the bundled one.
    pub fn load(lexicon_path: Option<&Path>, rules_path: Option<&Path>) -> Result<Self> {
        let lexicon = match lexicon_path {
            Some(path) => {
                log::info!("Loading lexicon from {}", path.display());
                Lexicon::from_file(path)?
            }
            None => Lexicon::bundled(),
        };
        let rules = match rules_path {
            Some(path) => {
                log::info!("Loading concept rules from {}", path.display());
                RuleTable::from_file(path)?
            }
            None => RuleTable::bundled(),
        };
        Ok(Self::new(lexicon, rules))
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleTable {
        &self.rules
    }

    #[must_use]
    pub const fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.lexicon)
    }

    #[must_use]
    pub const fn synthesizer(&self) -> Synthesizer<'_> {
        Synthesizer::new(&self.rules)
    }

    /// Dispatches a request. A blank query is rejected before either engine
    /// runs, so "typed nothing" never looks like "typed something unknown".
    pub fn process(&self, mode: Mode, query: &str, purpose: &str) -> Result<Outcome> {
        if query.trim().is_empty() {
            return Err(BridgeError::EmptyInput);
        }
        log::debug!("processing {mode} request");

        match mode {
            Mode::Lexical => Ok(Outcome::Lexical(self.explain(query)?)),
            Mode::Concept => Ok(Outcome::Concept(self.synthesize(query, purpose))),
        }
    }

    /// Same as [`Bridge::process`] for a mode given as text.
    pub fn process_raw(&self, mode: &str, query: &str, purpose: &str) -> Result<Outcome> {
        let mode: Mode = mode.parse()?;
        self.process(mode, query, purpose)
    }

    pub fn explain(&self, query: &str) -> Result<LookupResult> {
        Ok(self.resolver().explain(query)?)
    }

    #[must_use]
    pub fn synthesize(&self, concept: &str, purpose: &str) -> ConceptResult {
        self.synthesizer().synthesize(concept, purpose)
    }

    pub fn explain_gloss(&self, query: &str) -> Result<LookupResult> {
        Ok(self.resolver().explain_gloss(query)?)
    }

    pub fn explain_sentence(&self, sentence: &str) -> Result<SentenceAnalysis> {
        Ok(self.resolver().explain_sentence(sentence)?)
    }

    #[must_use]
    pub fn review_queue(&self) -> Vec<ReviewItem> {
        self.lexicon.review_queue()
    }
}
