use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{NameProfile, ParsingConfig};

/// Capitalized words shared by both stoplists: sentence starters and
/// transcript boilerplate.
const COMMON_STOPWORDS: &[&str] = &[
    "The",
    "This",
    "That",
    "They",
    "There",
    "Then",
    "These",
    "Those",
    "When",
    "Where",
    "What",
    "Why",
    "How",
    "Who",
    "Which",
    "Interview",
    "Transcript",
    "Maxwell",
    "Redacted",
    "Page",
    "Question",
    "Answer",
    "Detective",
    "Officer",
];

/// Honorifics dropped by the structured profile.
const TITLE_STOPWORDS: &[&str] = &["Mr", "Mrs", "Ms", "Dr", "Professor"];

/// Function words the byte scan picks up from PDF operators and streams.
const FUNCTION_STOPWORDS: &[&str] = &[
    "And", "But", "For", "Not", "You", "Are", "Was", "Were", "Been", "Have", "Has", "Had", "Will",
    "Would", "Could", "Should", "May", "Might", "Can", "Must", "Shall",
];

pub(crate) static STRUCTURED_STOPWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    COMMON_STOPWORDS
        .iter()
        .chain(TITLE_STOPWORDS)
        .map(|s| s.to_string())
        .collect()
});

pub(crate) static BYTE_SCAN_STOPWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    COMMON_STOPWORDS
        .iter()
        .chain(FUNCTION_STOPWORDS)
        .map(|s| s.to_string())
        .collect()
});

static STRUCTURED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());

static BYTE_SCAN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]{2,}(?:\s+[A-Z][a-z]{2,})*\b").unwrap());

/// The built-in stoplist for a profile.
pub fn default_stopwords(profile: NameProfile) -> &'static [String] {
    match profile {
        NameProfile::Structured => &STRUCTURED_STOPWORDS,
        NameProfile::ByteScan => &BYTE_SCAN_STOPWORDS,
    }
}

fn name_regex(config: &ParsingConfig) -> &Regex {
    config.name_re.as_ref().unwrap_or(match config.profile {
        NameProfile::Structured => &STRUCTURED_NAME_RE,
        NameProfile::ByteScan => &BYTE_SCAN_NAME_RE,
    })
}

/// Collect candidate proper names from `text`.
///
/// A candidate is a run of capitalized words ("Jane", "Jane Doe") that is not
/// on the stoplist (exact, case-sensitive) and is at least
/// `min_name_len` characters long. The set iterates in sorted order.
pub fn classify_names(text: &str, config: &ParsingConfig) -> BTreeSet<String> {
    let stopwords = config.stopwords.resolve(default_stopwords(config.profile));
    let stopwords: HashSet<&str> = stopwords.iter().map(String::as_str).collect();

    name_regex(config)
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|name| !stopwords.contains(name))
        .filter(|name| name.chars().count() >= config.min_name_len)
        .map(str::to_string)
        .collect()
}
