//! # Lnu Lexicon
//!
//! Read-only Mi'kmaw lexicon plus the tiered resolver that explains words
//! against it.
//!
//! ```text
//! query
//!   │
//!   ├──> normalize (trim + lowercase), blank -> EmptyQuery
//!   │
//!   ├──> tier 1: exact surface   ─┐
//!   ├──> tier 2: exact lemma     ─┴─> LookupResult::Lexicon
//!   │
//!   └──> miss -> LookupResult::Unknown (query as typed + guidance)
//! ```
//!
//! Every scan is linear over the entries in document order, so the first
//! matching entry always wins.

mod error;
mod resolver;
mod sentence;
mod store;

pub use error::{LexiconError, Result};
pub use resolver::Resolver;
pub use sentence::tokenize;
pub use store::Lexicon;

/// The comparison key used by every lookup tier.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
