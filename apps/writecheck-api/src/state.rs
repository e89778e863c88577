//! Application state for the Writecheck API

use analysis_engine::Analyzer;
use grammar_engine::EnglishRules;
use lang_parser::EnglishParser;

pub struct AppState {
    pub analyzer: Analyzer<EnglishParser, EnglishRules>,
}

impl AppState {
    /// Engine construction is the expensive part of startup; it happens
    /// exactly once here and the instance is shared across all requests.
    pub fn new() -> Self {
        tracing::info!("Loading language parser and grammar rule set...");
        Self {
            analyzer: Analyzer::new(EnglishParser::new(), EnglishRules::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
