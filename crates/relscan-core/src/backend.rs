use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A strategy for turning a document on disk into text.
///
/// Two implementations exist: structured page extraction through MuPDF
/// (`relscan_pdf_mupdf::MupdfSource`) and the raw byte scan
/// (`relscan_ingest::ByteScanSource`). Callers pick one explicitly; a failed
/// extraction is never retried with the other.
pub trait TextSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Extract the full text content of the file at `path`.
    fn extract_text(&self, path: &Path) -> Result<String, AcquisitionError>;
}
