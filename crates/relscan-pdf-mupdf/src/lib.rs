use std::path::Path;

use mupdf::{Document, Page, Rect, TextPageFlags};

use relscan_core::{AcquisitionError, TextSource, expand_ligatures};

/// Structured text extraction through MuPDF.
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency so
/// the byte-scan path and the heuristics do not transitively depend on it.
///
/// Pages are read in document order, block by block and line by line, and
/// joined with a newline. Header/footer exclusion is off by default; when
/// set, blocks lying in the top or bottom band of a page (as a fraction of
/// page height) are skipped, which keeps running headers such as
/// "Page 12 of 90" out of the text.
#[derive(Debug, Clone, Default)]
pub struct MupdfSource {
    /// Fraction of page height from bottom to exclude as footer (0.0–1.0).
    footer_exclusion_ratio: Option<f32>,
    /// Fraction of page height from top to exclude as header (0.0–1.0).
    header_exclusion_ratio: Option<f32>,
}

impl MupdfSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer exclusion ratio. Pass `0.0` to disable.
    pub fn with_footer_exclusion(mut self, ratio: f32) -> Self {
        self.footer_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }

    /// Set the header exclusion ratio. Pass `0.0` to disable.
    pub fn with_header_exclusion(mut self, ratio: f32) -> Self {
        self.header_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }
}

impl MupdfSource {
    /// Vertical span of `page` whose blocks are kept, after header/footer exclusion.
    fn kept_band(&self, page: &Rect) -> (f32, f32) {
        let height = page.y1 - page.y0;
        let top = self
            .header_exclusion_ratio
            .map_or(f32::NEG_INFINITY, |r| page.y0 + height * r);
        let bottom = self
            .footer_exclusion_ratio
            .map_or(f32::INFINITY, |r| page.y1 - height * r);
        (top, bottom)
    }

    /// Text of one transcript page, one output line per MuPDF line.
    fn page_text(&self, page: &Page) -> Result<String, AcquisitionError> {
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(extraction_error)?;
        let (top, bottom) = self.kept_band(&page.bounds().map_err(extraction_error)?);

        let mut text = String::new();
        for block in text_page.blocks() {
            let bounds = block.bounds();
            // A block wholly inside the header or footer band is a running
            // header ("Page 12 of 90") rather than testimony.
            if bounds.y1 <= top || bounds.y0 >= bottom {
                continue;
            }
            for line in block.lines() {
                text.extend(line.chars().map(|c| c.char().unwrap_or('\u{FFFD}')));
                text.push('\n');
            }
        }
        Ok(text)
    }
}

fn extraction_error(e: impl std::fmt::Display) -> AcquisitionError {
    AcquisitionError::ExtractionError(e.to_string())
}

impl TextSource for MupdfSource {
    fn name(&self) -> &'static str {
        "mupdf"
    }

    fn extract_text(&self, path: &Path) -> Result<String, AcquisitionError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| AcquisitionError::OpenError("invalid path encoding".into()))?;
        let document =
            Document::open(path_str).map_err(|e| AcquisitionError::OpenError(e.to_string()))?;

        let pages = document
            .pages()
            .map_err(extraction_error)?
            .map(|page| self.page_text(&page.map_err(extraction_error)?))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expand_ligatures(&pages.join("\n")))
    }
}
