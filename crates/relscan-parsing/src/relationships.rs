use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use relscan_core::{REDACTED, Relationship};

use crate::config::ParsingConfig;

// Entity spans stay case-sensitive (capitalized words); connector words are
// wrapped in `(?i:...)` so "Works With" and "works with" both match.
macro_rules! entity {
    () => {
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)"
    };
}

/// Two-entity templates, applied in this order.
pub(crate) static RELATION_TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "Jane is my sister"
        concat!(
            entity!(),
            r"\s+(?i:is|was)\s+(?i:my|his|her|their)\s+([A-Za-z]+)"
        ),
        // "Jane and John are friends"
        concat!(
            entity!(),
            r"\s+(?i:and)\s+",
            entity!(),
            r"\s+(?i:are)\s+([A-Za-z]+)"
        ),
        // "Jane works with John", "Jane work for John"
        concat!(entity!(), r"\s+(?i:works?)\s+(?i:with|for)\s+", entity!()),
        // "Jane knows John"
        concat!(entity!(), r"\s+(?i:knows?)\s+", entity!()),
        // "Jane met John"
        concat!(entity!(), r"\s+(?i:met|meets?)\s+", entity!()),
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Templates with one party replaced by the redaction placeholder.
pub(crate) static REDACTED_TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i:REDACTED)\s+(?i:is|was)\s+(?i:my|his|her|their)\s+([A-Za-z]+)",
        concat!(
            r"(?i:REDACTED)\s+(?i:and)\s+",
            entity!(),
            r"\s+(?i:are)\s+([A-Za-z]+)"
        ),
        concat!(entity!(), r"\s+(?i:and)\s+(?i:REDACTED)\s+(?i:are)\s+([A-Za-z]+)"),
        concat!(r"(?i:REDACTED)\s+(?i:works?)\s+(?i:with|for)\s+", entity!()),
        concat!(entity!(), r"\s+(?i:works?)\s+(?i:with|for)\s+(?i:REDACTED)"),
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Turn one match into a tuple. A lone capture is the non-redacted party,
/// so it is paired with [`REDACTED`].
fn to_relationship(caps: &Captures<'_>) -> Option<Relationship> {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    match caps.len() - 1 {
        1 => Some(Relationship::pair(REDACTED, group(1))),
        2 => Some(Relationship::pair(group(1), group(2))),
        3 => Some(Relationship::triple(group(1), group(2), group(3))),
        _ => None,
    }
}

fn apply_templates(text: &str, templates: &[Regex], out: &mut Vec<Relationship>) {
    for (i, re) in templates.iter().enumerate() {
        let before = out.len();
        out.extend(re.captures_iter(text).filter_map(|c| to_relationship(&c)));
        tracing::trace!(template = i, matches = out.len() - before, "relationship template");
    }
}

/// Find relationship phrases in `text`.
///
/// Named-entity templates run first, then the redacted ones. Within a
/// template, matches are in text order. Nothing is deduplicated: a phrase
/// that fits two templates is reported twice.
pub fn extract_relationships(text: &str, config: &ParsingConfig) -> Vec<Relationship> {
    let relation = config.relation_templates.resolve(&RELATION_TEMPLATES);
    let redacted = config.redacted_templates.resolve(&REDACTED_TEMPLATES);

    let mut relationships = Vec::new();
    apply_templates(text, &relation, &mut relationships);
    apply_templates(text, &redacted, &mut relationships);
    relationships
}
