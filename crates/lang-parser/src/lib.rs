//! English sentence segmentation and tagging backend.
//!
//! Implements the pipeline's [`LanguageParser`] seam: sentence and word
//! boundaries follow UAX #29 (`unicode-segmentation`), tags come from the
//! lexicon/suffix tagger in [`tagger`].

pub mod lexicon;
pub mod tagger;

use analysis_engine::engine::{EngineError, LanguageParser, ParsedSentence};
use unicode_segmentation::UnicodeSegmentation;

/// Shared, read-only parser instance. Construct once per process and reuse;
/// segmentation keeps no per-call state.
pub struct EnglishParser;

impl EnglishParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnglishParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for EnglishParser {
    fn segment_and_tag(&self, text: &str) -> Result<Vec<ParsedSentence>, EngineError> {
        Ok(text
            .unicode_sentences()
            .filter_map(|raw| {
                let tokens = tagger::tag_sentence(raw);
                (!tokens.is_empty()).then(|| ParsedSentence {
                    text: raw.trim().to_string(),
                    tokens,
                })
            })
            .collect())
    }
}
