//! Maps raw grammar-engine matches onto issue records tied to the original
//! source text.

use shared_types::GrammarIssue;

use crate::engine::{EngineError, GrammarEngine, GrammarMatch};

/// Run the grammar engine and resolve each match to the exact flagged
/// substring of `text`. Issue order mirrors the engine's match order.
pub fn check_grammar<G: GrammarEngine>(
    engine: &G,
    text: &str,
) -> Result<Vec<GrammarIssue>, EngineError> {
    let matches = engine.check(text)?;
    Ok(matches.into_iter().map(|m| to_issue(text, m)).collect())
}

fn to_issue(text: &str, m: GrammarMatch) -> GrammarIssue {
    GrammarIssue {
        error_text: slice_chars(text, m.offset, m.length),
        message: m.message,
        suggestions: m.replacements,
        rule_id: m.rule_id,
    }
}

// Engine offsets count characters, so the slice must too; indexing by bytes
// breaks on any multi-byte input.
fn slice_chars(text: &str, offset: usize, length: usize) -> String {
    text.chars().skip(offset).take(length).collect()
}
