use std::fs::File;
use std::io::Read;
use std::path::Path;

use regex::Regex;

use relscan_core::{AcquisitionError, TextSource};

/// Bytes read from the start of the file by default.
pub const DEFAULT_MAX_BYTES: usize = 50_000;
/// Shortest letter/whitespace run kept by default.
pub const DEFAULT_MIN_RUN_LEN: usize = 10;

/// Best-effort text acquisition that ignores PDF structure entirely.
///
/// Reads a bounded prefix of the raw file, decodes it as UTF-8 while
/// dropping invalid sequences, and keeps runs of ASCII letters and
/// whitespace. Uncompressed text streams survive this; compressed ones do
/// not, so recall is low by nature.
#[derive(Debug, Clone)]
pub struct ByteScanSource {
    max_bytes: usize,
    min_run_len: usize,
}

impl Default for ByteScanSource {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            min_run_len: DEFAULT_MIN_RUN_LEN,
        }
    }
}

impl ByteScanSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Runs shorter than this are discarded. Clamped to at least 1.
    pub fn with_min_run_len(mut self, min_run_len: usize) -> Self {
        self.min_run_len = min_run_len.max(1);
        self
    }
}

/// Decode `bytes` as UTF-8, silently dropping invalid sequences. A multi-byte
/// character cut off at the end of the buffer is dropped too.
pub fn decode_lenient(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Join all runs of at least `min_run_len` ASCII letters/whitespace with a space.
pub fn readable_runs(decoded: &str, min_run_len: usize) -> Result<String, regex::Error> {
    let re = Regex::new(&format!(r"[A-Za-z\s]{{{},}}", min_run_len.max(1)))?;
    Ok(re
        .find_iter(decoded)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" "))
}

impl TextSource for ByteScanSource {
    fn name(&self) -> &'static str {
        "byte-scan"
    }

    fn extract_text(&self, path: &Path) -> Result<String, AcquisitionError> {
        let mut prefix = Vec::with_capacity(self.max_bytes.min(1 << 20));
        File::open(path)?
            .take(self.max_bytes as u64)
            .read_to_end(&mut prefix)?;

        let decoded = decode_lenient(&prefix);
        readable_runs(&decoded, self.min_run_len)
            .map_err(|e| AcquisitionError::ExtractionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lenient_drops_invalid_bytes() {
        assert_eq!(decode_lenient(b"ab\xffcd"), "abcd");
        assert_eq!(decode_lenient("h\u{e9}llo".as_bytes()), "h\u{e9}llo");
        // Truncated two-byte sequence at the end.
        assert_eq!(decode_lenient(b"abc\xc3"), "abc");
    }

    #[test]
    fn test_readable_runs() {
        let text = "%PDF-1.4 1 0 obj << /Type /Catalog >> BT (Hello there friend) Tj ET";
        let runs = readable_runs(text, 10).unwrap();
        assert_eq!(runs, "Hello there friend");
    }

    #[test]
    fn test_readable_runs_joins_with_space() {
        let runs = readable_runs("abcdefghij|klmnopqrst|uv", 10).unwrap();
        assert_eq!(runs, "abcdefghij klmnopqrst");
        assert_eq!(readable_runs("", 10).unwrap(), "");
    }

    #[test]
    fn test_extract_respects_max_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, "Alpha Bravo Charlie|Delta Echo Foxtrot").unwrap();

        let source = ByteScanSource::new().with_max_bytes(19);
        assert_eq!(source.extract_text(&path).unwrap(), "Alpha Bravo Charlie");

        let full = ByteScanSource::new().extract_text(&path).unwrap();
        assert_eq!(full, "Alpha Bravo Charlie Delta Echo Foxtrot");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ByteScanSource::new().extract_text(&dir.path().join("gone.pdf"));
        assert!(matches!(result, Err(AcquisitionError::Io(_))));
    }
}
