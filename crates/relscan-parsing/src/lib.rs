use std::collections::BTreeSet;

pub mod config;
pub mod keywords;
pub mod names;
pub mod relationships;

pub use config::{ConfigError, ListOverride, NameProfile, ParsingConfig, ParsingConfigBuilder};
pub use keywords::{count_redactions, keyword_hits};
pub use names::{classify_names, default_stopwords};
pub use relationships::extract_relationships;
// Re-export domain types from core (canonical definitions live there)
pub use relscan_core::{DocumentText, REDACTED, Relationship};

/// Names and relationship tuples found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub names: BTreeSet<String>,
    pub relationships: Vec<Relationship>,
}

/// Run name classification and relationship extraction over `text`.
pub fn analyze(text: &str, config: &ParsingConfig) -> Analysis {
    Analysis {
        names: classify_names(text, config),
        relationships: extract_relationships(text, config),
    }
}

/// [`analyze`] for an acquired document, with per-document logging.
pub fn analyze_document(doc: &DocumentText, config: &ParsingConfig) -> Analysis {
    let analysis = analyze(doc.text(), config);
    tracing::debug!(
        path = %doc.path().display(),
        profile = ?config.profile(),
        chars = doc.char_len(),
        names = analysis.names.len(),
        relationships = analysis.relationships.len(),
        "analyzed document"
    );
    analysis
}
