/// One token of a parsed sentence: surface text, part-of-speech tag and the
/// dependency label relating it to its syntactic head.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: String,
    pub dep: String,
}

/// A segmented sentence with its derived guideline flags.
///
/// Never mutated after segmentation; `token_count` always equals
/// `structure.len()`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sentence {
    #[serde(rename = "sentence")]
    pub text: String,
    pub token_count: usize,
    #[serde(rename = "passive_voice")]
    pub is_passive: bool,
    #[serde(rename = "long_sentence")]
    pub is_long: bool,
    pub structure: Vec<Token>,
}

/// One flagged grammar or spelling problem.
///
/// `error_text` is the exact slice of the original analyzed text at the
/// offsets the grammar engine reported; it is only meaningful against the
/// unmodified input.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    pub suggestions: Vec<String>,
    pub error_text: String,
    pub rule_id: String,
}

/// Aggregate statistics for one analysis run. All fields are derived from
/// the sentence and issue lists.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub total_sentences: usize,
    pub avg_sentence_length: f64,
    pub num_passive_sentences: usize,
    pub num_long_sentences: usize,
    pub num_grammar_issues: usize,
}

/// The result of a compliance check. The per-sentence `analysis` array is
/// optional on the wire and omitted when not requested.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub grammar_issues: Vec<GrammarIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Vec<Sentence>>,
}

/// A corrected document rendered as a downloadable artifact.
#[derive(Debug, Clone)]
pub struct CorrectedArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            summary: Summary {
                total_sentences: 1,
                avg_sentence_length: 8.0,
                num_passive_sentences: 1,
                num_long_sentences: 0,
                num_grammar_issues: 1,
            },
            grammar_issues: vec![GrammarIssue {
                message: "Possible spelling mistake found.".to_string(),
                suggestions: vec!["receive".to_string()],
                error_text: "recieve".to_string(),
                rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
            }],
            analysis: None,
        }
    }

    #[test]
    fn report_wire_field_names_are_stable() {
        let json = serde_json::to_value(sample_report()).unwrap();

        let summary = &json["summary"];
        assert_eq!(summary["total_sentences"], 1);
        assert_eq!(summary["avg_sentence_length"], 8.0);
        assert_eq!(summary["num_passive_sentences"], 1);
        assert_eq!(summary["num_long_sentences"], 0);
        assert_eq!(summary["num_grammar_issues"], 1);

        let issue = &json["grammar_issues"][0];
        assert_eq!(issue["error_text"], "recieve");
        assert_eq!(issue["rule_id"], "MORFOLOGIK_RULE_EN_US");
        assert_eq!(issue["suggestions"][0], "receive");
    }

    #[test]
    fn analysis_array_is_omitted_when_absent() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn sentence_serializes_with_renamed_fields() {
        let sentence = Sentence {
            text: "The report was submitted.".to_string(),
            token_count: 5,
            is_passive: true,
            is_long: false,
            structure: vec![Token {
                text: "The".to_string(),
                pos: "DET".to_string(),
                dep: "det".to_string(),
            }],
        };

        let json = serde_json::to_value(&sentence).unwrap();
        assert_eq!(json["sentence"], "The report was submitted.");
        assert_eq!(json["passive_voice"], true);
        assert_eq!(json["long_sentence"], false);
        assert_eq!(json["structure"][0]["dep"], "det");
    }
}
