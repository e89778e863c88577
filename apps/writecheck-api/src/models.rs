//! Request models for the Writecheck API

use serde::Deserialize;

/// Extracted document text submitted for a compliance check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub file_text: String,
    /// Attach the per-sentence analysis array to the report.
    #[serde(default)]
    pub include_analysis: bool,
}

/// Extracted document text submitted for correction.
#[derive(Debug, Clone, Deserialize)]
pub struct CorrectRequest {
    pub file_text: String,
    /// Download filename for the corrected document.
    #[serde(default)]
    pub filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_analysis_defaults_to_false() {
        let req: CheckRequest = serde_json::from_str(r#"{"file_text": "Hello."}"#).unwrap();
        assert!(!req.include_analysis);
    }

    #[test]
    fn test_filename_is_optional() {
        let req: CorrectRequest = serde_json::from_str(r#"{"file_text": "Hello."}"#).unwrap();
        assert!(req.filename.is_none());
    }
}
