//! Per-sentence linguistic feature extraction.

use shared_types::Sentence;

use crate::engine::{EngineError, LanguageParser, ParsedSentence};

/// Dependency labels that mark a passive construction (passive auxiliary and
/// passive subject). The bundled parser emits this ClearNLP-style
/// convention; a backend with a different tagset needs its equivalents
/// listed here.
pub const PASSIVE_DEP_LABELS: [&str; 2] = ["auxpass", "nsubjpass"];

/// Sentences with more than this many tokens are flagged as long. Exactly
/// this many is not long.
pub const LONG_SENTENCE_TOKENS: usize = 25;

/// Segment `text` and derive the per-sentence guideline flags. Produces no
/// side effects and no aggregation; identical input against the same parser
/// yields identical output.
pub fn extract<P: LanguageParser>(parser: &P, text: &str) -> Result<Vec<Sentence>, EngineError> {
    let parsed = parser.segment_and_tag(text)?;
    Ok(parsed.into_iter().map(to_sentence).collect())
}

fn to_sentence(parsed: ParsedSentence) -> Sentence {
    let token_count = parsed.tokens.len();
    let is_passive = parsed
        .tokens
        .iter()
        .any(|t| PASSIVE_DEP_LABELS.contains(&t.dep.as_str()));

    Sentence {
        text: parsed.text.trim().to_string(),
        token_count,
        is_passive,
        is_long: token_count > LONG_SENTENCE_TOKENS,
        structure: parsed.tokens,
    }
}
