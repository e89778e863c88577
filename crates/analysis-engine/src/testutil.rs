//! Fake engines for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use shared_types::Token;

use crate::engine::{EngineError, GrammarEngine, GrammarMatch, LanguageParser, ParsedSentence};

pub fn tok(text: &str, pos: &str, dep: &str) -> Token {
    Token {
        text: text.to_string(),
        pos: pos.to_string(),
        dep: dep.to_string(),
    }
}

/// Parser that returns a canned segmentation regardless of input.
pub struct FixedParser(pub Vec<ParsedSentence>);

impl LanguageParser for FixedParser {
    fn segment_and_tag(&self, _text: &str) -> Result<Vec<ParsedSentence>, EngineError> {
        Ok(self.0.clone())
    }
}

/// Grammar engine that returns canned matches and a canned correction.
pub struct FixedGrammar {
    matches: Vec<GrammarMatch>,
    corrected: String,
}

impl FixedGrammar {
    pub fn with_matches(matches: Vec<GrammarMatch>) -> Self {
        Self {
            matches,
            corrected: String::new(),
        }
    }

    pub fn with_correction(corrected: &str) -> Self {
        Self {
            matches: Vec::new(),
            corrected: corrected.to_string(),
        }
    }
}

impl GrammarEngine for FixedGrammar {
    fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>, EngineError> {
        Ok(self.matches.clone())
    }

    fn correct(&self, _text: &str) -> Result<String, EngineError> {
        Ok(self.corrected.clone())
    }
}

/// Parser that always fails, for error-surfacing tests.
pub struct FailingParser;

impl LanguageParser for FailingParser {
    fn segment_and_tag(&self, _text: &str) -> Result<Vec<ParsedSentence>, EngineError> {
        Err(anyhow::anyhow!("parser model unavailable").into())
    }
}

/// Parser that counts how often it is invoked.
#[derive(Default)]
pub struct CountingParser {
    calls: AtomicUsize,
}

impl CountingParser {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LanguageParser for CountingParser {
    fn segment_and_tag(&self, _text: &str) -> Result<Vec<ParsedSentence>, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

/// Grammar engine that counts how often it is invoked.
#[derive(Default)]
pub struct CountingGrammar {
    calls: AtomicUsize,
}

impl CountingGrammar {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GrammarEngine for CountingGrammar {
    fn check(&self, _text: &str) -> Result<Vec<GrammarMatch>, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    fn correct(&self, _text: &str) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(String::new())
    }
}
