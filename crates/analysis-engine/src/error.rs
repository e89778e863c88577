//! Error taxonomy for the analysis pipeline.

use thiserror::Error;

use crate::corrector::ArtifactWriteError;
use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Blank or whitespace-only text was submitted. Checked before any
    /// engine is invoked.
    #[error("Empty text received")]
    EmptyInput,

    /// The parser or grammar engine failed. Distinct from a successful run
    /// with zero sentences or issues.
    #[error("language engine failure: {0}")]
    Engine(#[from] EngineError),

    /// The corrected-document artifact could not be produced.
    #[error("failed to write corrected document: {0}")]
    ArtifactWrite(#[from] ArtifactWriteError),
}
