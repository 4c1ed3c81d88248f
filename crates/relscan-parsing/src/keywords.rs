use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;

/// Relationship vocabulary for the quick substring scan.
pub(crate) static RELATIONSHIP_KEYWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "partner",
        "colleague",
        "friend",
        "associate",
        "boss",
        "employee",
        "supervisor",
        "manager",
        "director",
        "works with",
        "knows",
        "met",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// Count occurrences of the redaction placeholder, ignoring case.
pub fn count_redactions(text: &str) -> usize {
    static REDACTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)REDACTED").unwrap());
    REDACTED_RE.find_iter(text).count()
}

/// Keywords from the configured vocabulary that occur anywhere in `text`.
///
/// Plain substring containment after lowercasing both sides, so "met" also
/// hits "metal". Hits keep vocabulary order.
pub fn keyword_hits(text: &str, config: &ParsingConfig) -> Vec<String> {
    let haystack = text.to_lowercase();
    config
        .keywords
        .resolve(&RELATIONSHIP_KEYWORDS)
        .into_iter()
        .filter(|word| haystack.contains(&word.to_lowercase()))
        .collect()
}
