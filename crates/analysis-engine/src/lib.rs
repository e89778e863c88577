//! Compliance analysis & correction pipeline.
//!
//! Turns extracted document text into a structured report against English
//! writing guidelines (sentence features, passive/long flags, grammar
//! issues, aggregate statistics) and, separately, into a corrected `.docx`
//! artifact. The external parser and grammar engine are injected through the
//! traits in [`engine`].

pub mod corrector;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod grammar;
pub mod summary;

#[cfg(test)]
pub(crate) mod testutil;

use shared_types::{CorrectedArtifact, Report};

use engine::{GrammarEngine, LanguageParser};
use error::AnalysisError;

/// Pipeline entry point holding the injected engine handles. One instance is
/// meant to live for the whole process; all methods take `&self` and keep no
/// mutable state.
pub struct Analyzer<P, G> {
    parser: P,
    grammar: G,
}

impl<P: LanguageParser, G: GrammarEngine> Analyzer<P, G> {
    pub fn new(parser: P, grammar: G) -> Self {
        Self { parser, grammar }
    }

    /// Run the full compliance check: segmentation, per-sentence features,
    /// grammar issues, summary. `include_analysis` controls whether the
    /// per-sentence array is attached to the report.
    ///
    /// Blank input fails with [`AnalysisError::EmptyInput`] before any
    /// engine is invoked.
    pub fn check(&self, text: &str, include_analysis: bool) -> Result<Report, AnalysisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let sentences = extractor::extract(&self.parser, text)?;
        let issues = grammar::check_grammar(&self.grammar, text)?;
        let summary = summary::aggregate(&sentences, &issues);

        Ok(Report {
            summary,
            grammar_issues: issues,
            analysis: include_analysis.then_some(sentences),
        })
    }

    /// Correct the text and build the downloadable `.docx` artifact. Either
    /// a complete artifact is returned or an error; there is no partial
    /// result.
    pub fn correct(
        &self,
        text: &str,
        filename: Option<&str>,
    ) -> Result<CorrectedArtifact, AnalysisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let corrected = corrector::correct(&self.grammar, text)?;
        Ok(corrector::build_artifact(&corrected, filename)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GrammarMatch, ParsedSentence};
    use crate::testutil::{tok, CountingGrammar, CountingParser, FailingParser, FixedGrammar, FixedParser};

    fn passive_sentence() -> ParsedSentence {
        ParsedSentence {
            text: "The report was submitted by the team.".to_string(),
            tokens: vec![
                tok("The", "DET", "det"),
                tok("report", "NOUN", "nsubjpass"),
                tok("was", "AUX", "auxpass"),
                tok("submitted", "VERB", "dep"),
                tok("by", "ADP", "prep"),
                tok("the", "DET", "det"),
                tok("team", "NOUN", "dep"),
                tok(".", "PUNCT", "punct"),
            ],
        }
    }

    fn analyzer_with_one_issue() -> Analyzer<FixedParser, FixedGrammar> {
        Analyzer::new(
            FixedParser(vec![passive_sentence()]),
            FixedGrammar::with_matches(vec![GrammarMatch {
                message: "Possible spelling mistake found.".to_string(),
                offset: 0,
                length: 3,
                rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
                replacements: vec!["The".to_string()],
            }]),
        )
    }

    #[test]
    fn test_check_builds_full_report() {
        let analyzer = analyzer_with_one_issue();
        let report = analyzer
            .check("The report was submitted by the team.", true)
            .unwrap();

        assert_eq!(report.summary.total_sentences, 1);
        assert_eq!(report.summary.num_passive_sentences, 1);
        assert_eq!(report.summary.num_long_sentences, 0);
        assert_eq!(report.summary.num_grammar_issues, 1);
        assert_eq!(report.summary.avg_sentence_length, 8.0);

        let analysis = report.analysis.expect("analysis requested");
        assert!(analysis[0].is_passive);
        assert_eq!(report.grammar_issues[0].error_text, "The");
    }

    #[test]
    fn test_analysis_array_is_omitted_by_default() {
        let analyzer = analyzer_with_one_issue();
        let report = analyzer
            .check("The report was submitted by the team.", false)
            .unwrap();
        assert!(report.analysis.is_none());
    }

    #[test]
    fn test_check_is_idempotent() {
        let analyzer = analyzer_with_one_issue();
        let text = "The report was submitted by the team.";
        assert_eq!(
            analyzer.check(text, true).unwrap(),
            analyzer.check(text, true).unwrap()
        );
    }

    #[test]
    fn test_empty_input_never_reaches_the_engines() {
        let parser = CountingParser::default();
        let grammar = CountingGrammar::default();
        let analyzer = Analyzer::new(parser, grammar);

        assert!(matches!(
            analyzer.check("   \n\t  ", false),
            Err(AnalysisError::EmptyInput)
        ));
        assert!(matches!(
            analyzer.correct("", None),
            Err(AnalysisError::EmptyInput)
        ));
        assert_eq!(analyzer.parser.calls(), 0);
        assert_eq!(analyzer.grammar.calls(), 0);
    }

    #[test]
    fn test_engine_failure_is_surfaced_not_swallowed() {
        let analyzer = Analyzer::new(FailingParser, FixedGrammar::with_matches(Vec::new()));
        let result = analyzer.check("Some text.", false);
        assert!(matches!(result, Err(AnalysisError::Engine(_))));
    }

    #[test]
    fn test_correct_produces_complete_artifact() {
        let analyzer = Analyzer::new(
            FixedParser(Vec::new()),
            FixedGrammar::with_correction("Line one.\nLine two."),
        );

        let artifact = analyzer.correct("Line one.\nLine two.", None).unwrap();
        assert_eq!(artifact.filename, corrector::DEFAULT_ARTIFACT_FILENAME);
        assert!(artifact.bytes.starts_with(b"PK"));
    }
}
