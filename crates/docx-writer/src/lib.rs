//! Serializes an ordered paragraph list into a `.docx` document readable by
//! common word processors.

use std::io::{Seek, Write};

use docx_rs::{Docx, DocxError, Paragraph, Run};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxWriteError {
    #[error("failed to assemble document: {0}")]
    Docx(#[from] DocxError),
}

/// Write one document paragraph per entry, in order. Empty entries become
/// empty paragraphs rather than being dropped.
pub fn write_paragraphs<W: Write + Seek>(
    paragraphs: &[String],
    writer: W,
) -> Result<(), DocxWriteError> {
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())));
    }
    docx.build().pack(writer).map_err(DocxError::from)?;
    Ok(())
}
