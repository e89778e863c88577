//! Trait seams for the external language engines.
//!
//! Sentence segmentation/tagging and grammar-rule matching are expensive to
//! initialize and are consumed through these traits, so a single engine
//! instance can be loaded at process start and shared across requests, and
//! tests can substitute fakes.

use shared_types::Token;
use thiserror::Error;

/// Failure inside an external engine (parser or grammar rules).
#[derive(Debug, Error)]
#[error(transparent)]
pub struct EngineError(#[from] anyhow::Error);

/// One segmented sentence with its tagged tokens, as produced by the parser.
/// Token order within the sentence is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// A grammar-rule match against the checked text.
///
/// `offset` and `length` are **character** indices into the checked text,
/// never byte indices. They are only valid against the unmodified input.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarMatch {
    pub message: String,
    pub offset: usize,
    pub length: usize,
    pub rule_id: String,
    pub replacements: Vec<String>,
}

/// Sentence-boundary detection plus per-token part-of-speech and dependency
/// tagging.
pub trait LanguageParser: Send + Sync {
    fn segment_and_tag(&self, text: &str) -> Result<Vec<ParsedSentence>, EngineError>;
}

/// Rule-based grammar checking and auto-correction. Both operations run
/// against the same rule state; `correct` owns the resolution of conflicting
/// or overlapping replacements.
pub trait GrammarEngine: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>, EngineError>;
    fn correct(&self, text: &str) -> Result<String, EngineError>;
}
