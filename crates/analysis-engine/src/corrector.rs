//! Grammar correction and corrected-document reconstruction.

use shared_types::CorrectedArtifact;
use thiserror::Error;

use crate::engine::{EngineError, GrammarEngine};

/// Filename used when the caller does not supply one.
pub const DEFAULT_ARTIFACT_FILENAME: &str = "corrected_document.docx";

#[derive(Debug, Error)]
pub enum ArtifactWriteError {
    #[error("scratch file: {0}")]
    Scratch(#[from] std::io::Error),

    #[error(transparent)]
    Docx(#[from] docx_writer::DocxWriteError),
}

/// Apply the engine's best-guess replacement for every detected issue.
/// Conflicting or overlapping replacements are resolved by the engine.
pub fn correct<G: GrammarEngine>(engine: &G, text: &str) -> Result<String, EngineError> {
    engine.correct(text)
}

/// Split corrected text into trimmed paragraphs on newline boundaries.
/// Lines that trim to nothing stay as empty paragraph entries.
pub fn split_paragraphs(corrected: &str) -> Vec<String> {
    corrected
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect()
}

/// Serialize the corrected text into a `.docx` artifact and return its
/// bytes together with the download filename.
///
/// The document is written through a fresh uniquely-named scratch file which
/// is removed when this function returns, so concurrent requests never
/// contend on a predictable path and no path leaks to the caller.
pub fn build_artifact(
    corrected: &str,
    filename: Option<&str>,
) -> Result<CorrectedArtifact, ArtifactWriteError> {
    let paragraphs = split_paragraphs(corrected);

    let mut scratch = tempfile::Builder::new()
        .prefix("writecheck-")
        .suffix(".docx")
        .tempfile()?;
    docx_writer::write_paragraphs(&paragraphs, scratch.as_file_mut())?;
    let bytes = std::fs::read(scratch.path())?;

    Ok(CorrectedArtifact {
        filename: artifact_filename(filename),
        bytes,
    })
}

fn artifact_filename(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(name) if !name.is_empty() => {
            if name.to_ascii_lowercase().ends_with(".docx") {
                name.to_string()
            } else {
                format!("{name}.docx")
            }
        }
        _ => DEFAULT_ARTIFACT_FILENAME.to_string(),
    }
}
