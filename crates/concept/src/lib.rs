//! # Lnu Concept
//!
//! Candidate-word synthesis for concepts the lexicon has no word for.
//!
//! A [`RuleTable`] is an ordered list of keyword rules closed by a fallback
//! rule; the [`Synthesizer`] returns the candidate of the first rule whose
//! keywords appear in the request. Every candidate carries a non-empty
//! caution because none of them are attested words.

mod error;
mod rules;
mod synthesizer;

pub use error::{ConceptError, Result};
pub use rules::{ConceptRule, RuleTable};
pub use synthesizer::Synthesizer;
