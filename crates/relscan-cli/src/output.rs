use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use relscan_core::Relationship;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

const ORDINALS: [&str; 10] = [
    "FIRST", "SECOND", "THIRD", "FOURTH", "FIFTH", "SIXTH", "SEVENTH", "EIGHTH", "NINTH", "TENTH",
];

/// "FIRST PDF", "SECOND PDF", ..., then "PDF 11" and so on.
pub fn document_label(index: usize) -> String {
    match index.checked_sub(1).and_then(|i| ORDINALS.get(i)) {
        Some(word) => format!("{} PDF", word),
        None => format!("PDF {}", index),
    }
}

fn heading(w: &mut dyn Write, text: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", text.bold().cyan())
    } else {
        writeln!(w, "{}", text)
    }
}

/// Header for one document in structured mode.
pub fn print_analyze_header(w: &mut dyn Write, index: usize, color: ColorMode) -> std::io::Result<()> {
    if index > 1 {
        writeln!(w)?;
    }
    heading(w, &format!("=== ANALYZING {} ===", document_label(index)), color)
}

/// Header for one document in byte-scan mode.
pub fn print_scan_header(
    w: &mut dyn Write,
    index: usize,
    path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    if index > 1 {
        writeln!(w)?;
    }
    heading(w, &format!("=== {} ANALYSIS ===", document_label(index)), color)?;
    writeln!(w, "Analyzing {}", path.display())
}

/// Diagnostic for a document whose text could not be acquired.
pub fn print_read_error(
    w: &mut dyn Write,
    path: &Path,
    error: &dyn std::fmt::Display,
    color: ColorMode,
) -> std::io::Result<()> {
    let msg = format!("Error reading {}: {}", path.display(), error);
    if color.enabled() {
        writeln!(w, "{}", msg.red())
    } else {
        writeln!(w, "{}", msg)
    }
}

/// Bulleted, sorted name list. `limit` caps how many are shown.
pub fn print_names(
    w: &mut dyn Write,
    title: &str,
    names: &BTreeSet<String>,
    limit: Option<usize>,
) -> std::io::Result<()> {
    writeln!(w, "{}", title)?;
    for name in names.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(w, "  - {}", name)?;
    }
    Ok(())
}

/// Relationship tuples in extraction order.
pub fn print_relationships(
    w: &mut dyn Write,
    relationships: &[Relationship],
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Relationships found:")?;
    for rel in relationships {
        if color.enabled() && rel.involves_redacted() {
            writeln!(w, "  - {}", rel.yellow())?;
        } else {
            writeln!(w, "  - {}", rel)?;
        }
    }
    Ok(())
}

/// Raw text sample shown by the byte scan, followed by a separator.
pub fn print_text_sample(w: &mut dyn Write, sample: &str, color: ColorMode) -> std::io::Result<()> {
    writeln!(w, "Sample text found:")?;
    if color.enabled() {
        writeln!(w, "{}", sample.dimmed())?;
    } else {
        writeln!(w, "{}", sample)?;
    }
    writeln!(w, "{}", "=".repeat(50))
}

/// Redaction count and keyword hits from the byte scan.
pub fn print_scan_findings(
    w: &mut dyn Write,
    redactions: usize,
    keyword_hits: &[String],
) -> std::io::Result<()> {
    writeln!(w, "REDACTED mentions found: {}", redactions)?;
    let quoted: Vec<String> = keyword_hits.iter().map(|k| format!("'{}'", k)).collect();
    writeln!(w, "Relationship terms found: [{}]", quoted.join(", "))
}

/// Cross-document name union printed after the byte scan.
pub fn print_summary(
    w: &mut dyn Write,
    all_names: &BTreeSet<String>,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w)?;
    heading(w, "=== SUMMARY ===", color)?;
    writeln!(w, "Total unique names found: {}", all_names.len())?;
    print_names(w, "All names:", all_names, None)
}
