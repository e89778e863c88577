//! Report-level aggregation of sentence and issue data.

use shared_types::{GrammarIssue, Sentence, Summary};

/// Reduce the per-sentence records and issue list into report statistics.
/// Pure and total: defined for empty inputs, deterministic for equal inputs.
pub fn aggregate(sentences: &[Sentence], issues: &[GrammarIssue]) -> Summary {
    let total_sentences = sentences.len();
    let token_sum: usize = sentences.iter().map(|s| s.token_count).sum();

    Summary {
        total_sentences,
        avg_sentence_length: token_sum as f64 / total_sentences.max(1) as f64,
        num_passive_sentences: sentences.iter().filter(|s| s.is_passive).count(),
        num_long_sentences: sentences.iter().filter(|s| s.is_long).count(),
        num_grammar_issues: issues.len(),
    }
}
