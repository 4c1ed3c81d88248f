use std::path::{Path, PathBuf};

use relscan_core::DocumentText;

/// Characters persisted per document by default.
pub const DEFAULT_SAMPLE_CHARS: usize = 5000;

/// File name of the sample for the `index`-th document (1-based).
pub fn sample_file_name(index: usize) -> String {
    format!("pdf{}_sample.txt", index)
}

/// Write the first `max_chars` characters of `doc` to
/// `<dir>/pdf<index>_sample.txt`, replacing any existing file.
///
/// Errors are returned to the caller unchanged; a failed sample write is
/// not a per-document error.
pub fn write_sample(
    dir: &Path,
    index: usize,
    doc: &DocumentText,
    max_chars: usize,
) -> std::io::Result<PathBuf> {
    let path = dir.join(sample_file_name(index));
    let sample = doc.sample(max_chars);
    std::fs::write(&path, sample.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        chars = sample.chars().count(),
        "wrote text sample"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_exact_char_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let text: String = "Zoë said hello. ".repeat(500);
        let doc = DocumentText::new("in.pdf", text.clone());

        let path = write_sample(dir.path(), 1, &doc, DEFAULT_SAMPLE_CHARS).unwrap();
        assert_eq!(path.file_name().unwrap(), "pdf1_sample.txt");

        let written = std::fs::read_to_string(&path).unwrap();
        let expected: String = text.chars().take(DEFAULT_SAMPLE_CHARS).collect();
        assert_eq!(written, expected);
    }

    #[test]
    fn short_text_written_whole_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pdf2_sample.txt"), "stale content that is longer").unwrap();

        let doc = DocumentText::new("in.pdf", "fresh".into());
        let path = write_sample(dir.path(), 2, &doc, DEFAULT_SAMPLE_CHARS).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "fresh");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let doc = DocumentText::new("in.pdf", "text".into());
        assert!(write_sample(&dir.path().join("absent"), 1, &doc, 10).is_err());
    }
}
