//! Rule-based English grammar checking and auto-correction backend.
//!
//! Implements the pipeline's [`GrammarEngine`] seam. Checking and correction
//! run against the same rule table; correction applies the first suggested
//! replacement of each non-overlapping match.

pub mod lexicon;
pub mod rules;

use analysis_engine::engine::{EngineError, GrammarEngine, GrammarMatch};

/// Shared, read-only rule set. Construct once per process and reuse; the
/// compiled rule table is global and immutable.
pub struct EnglishRules;

impl EnglishRules {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnglishRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarEngine for EnglishRules {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>, EngineError> {
        Ok(rules::check_all(text))
    }

    fn correct(&self, text: &str) -> Result<String, EngineError> {
        let matches = rules::check_all(text);
        Ok(rules::apply_matches(text, &matches))
    }
}
