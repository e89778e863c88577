pub mod types;

pub use types::{CorrectedArtifact, GrammarIssue, Report, Sentence, Summary, Token};
