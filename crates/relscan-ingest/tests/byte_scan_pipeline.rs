//! Byte-scan acquisition feeding the heuristics, the way `relscan scan` runs it.

use std::collections::BTreeSet;
use std::path::PathBuf;

use relscan_ingest::{SourceOptions, Strategy, acquire, source_for};
use relscan_parsing::{ParsingConfig, classify_names, count_redactions, keyword_hits};

fn fake_pdf(dir: &std::path::Path, name: &str, body: &str) -> PathBuf {
    let mut bytes = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<< /Length 90 >>\nstream\nBT (".to_vec();
    bytes.extend_from_slice(body.as_bytes());
    bytes.extend_from_slice(b") Tj ET\nendstream\n\xff\xfe\x00 endobj\n");
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn scan_finds_names_redactions_and_keywords() {
    let dir = tempfile::tempdir().unwrap();
    let path = fake_pdf(
        dir.path(),
        "one.pdf",
        "Witness said REDACTED was her friend and Martin Howell met redacted",
    );

    let source = source_for(Strategy::ByteScan, &SourceOptions::default()).unwrap();
    let doc = acquire(&path, source.as_ref()).unwrap();
    let config = ParsingConfig::byte_scan();

    assert_eq!(count_redactions(doc.text()), 2);
    assert_eq!(keyword_hits(doc.text(), &config), vec!["friend", "met"]);

    let names = classify_names(doc.text(), &config);
    assert!(names.contains("Martin Howell"));
    assert!(names.contains("Witness"));
}

#[test]
fn failed_document_does_not_stop_the_next() {
    let dir = tempfile::tempdir().unwrap();
    let good = fake_pdf(dir.path(), "two.pdf", "Statement given by Olivia Grant today");
    let paths = [dir.path().join("missing.pdf"), good];

    let source = source_for(Strategy::ByteScan, &SourceOptions::default()).unwrap();
    let config = ParsingConfig::byte_scan();

    let mut failures = 0;
    let mut all_names = BTreeSet::new();
    for path in &paths {
        match acquire(path, source.as_ref()) {
            Ok(doc) => all_names.extend(classify_names(doc.text(), &config)),
            Err(_) => failures += 1,
        }
    }

    assert_eq!(failures, 1);
    assert!(all_names.contains("Olivia Grant"));
}
