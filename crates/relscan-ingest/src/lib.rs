use std::path::Path;

use thiserror::Error;

pub mod byte_scan;
pub mod sample;

pub use byte_scan::{ByteScanSource, DEFAULT_MAX_BYTES, DEFAULT_MIN_RUN_LEN};
pub use sample::{DEFAULT_SAMPLE_CHARS, sample_file_name, write_sample};
// Re-export domain types for convenience
pub use relscan_core::{AcquisitionError, DocumentText, TextSource};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of relscan-ingest)")]
    NoPdfSupport,
}

/// How document text is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Page-by-page extraction through MuPDF.
    Structured,
    /// Printable runs from the raw bytes.
    ByteScan,
}

/// Tuning knobs for the two strategies.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    pub max_bytes: usize,
    pub min_run_len: usize,
    pub header_exclusion: f32,
    pub footer_exclusion: f32,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            min_run_len: DEFAULT_MIN_RUN_LEN,
            header_exclusion: 0.0,
            footer_exclusion: 0.0,
        }
    }
}

/// Build the [`TextSource`] for `strategy`.
pub fn source_for(
    strategy: Strategy,
    options: &SourceOptions,
) -> Result<Box<dyn TextSource>, IngestError> {
    match strategy {
        Strategy::Structured => structured_source(options),
        Strategy::ByteScan => Ok(Box::new(
            ByteScanSource::new()
                .with_max_bytes(options.max_bytes)
                .with_min_run_len(options.min_run_len),
        )),
    }
}

#[cfg(feature = "pdf")]
fn structured_source(options: &SourceOptions) -> Result<Box<dyn TextSource>, IngestError> {
    Ok(Box::new(
        relscan_pdf_mupdf::MupdfSource::new()
            .with_header_exclusion(options.header_exclusion)
            .with_footer_exclusion(options.footer_exclusion),
    ))
}

#[cfg(not(feature = "pdf"))]
fn structured_source(_options: &SourceOptions) -> Result<Box<dyn TextSource>, IngestError> {
    Err(IngestError::NoPdfSupport)
}

/// Acquire the text of one document.
///
/// Missing files, unreadable files and unparseable PDFs all come back as
/// `Err`; the caller decides whether to skip the document. An `Ok` with
/// empty text means the document really had no text.
pub fn acquire(path: &Path, source: &dyn TextSource) -> Result<DocumentText, IngestError> {
    match source.extract_text(path) {
        Ok(text) => {
            tracing::debug!(
                path = %path.display(),
                source = source.name(),
                bytes = text.len(),
                "acquired text"
            );
            Ok(DocumentText::new(path, text))
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                source = source.name(),
                error = %e,
                "text acquisition failed"
            );
            Err(e.into())
        }
    }
}
