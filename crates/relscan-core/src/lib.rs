use std::fmt;
use std::path::{Path, PathBuf};

pub mod backend;
pub mod config_file;
pub mod text;

pub use backend::{AcquisitionError, TextSource};
pub use text::{char_prefix, expand_ligatures};

/// Literal placeholder that stands in for an elided party's name.
pub const REDACTED: &str = "REDACTED";

/// The text of one document, produced once by a [`TextSource`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    path: PathBuf,
    text: String,
}

impl DocumentText {
    pub fn new(path: impl Into<PathBuf>, text: String) -> Self {
        Self {
            path: path.into(),
            text,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The first `min(max_chars, len)` characters of the text.
    pub fn sample(&self, max_chars: usize) -> &str {
        char_prefix(&self.text, max_chars)
    }

}

/// A relationship asserted by a phrase in the text.
///
/// Entities are candidate-name strings or [`REDACTED`]. The second slot of a
/// `Pair` is either the other entity or a relation word ("brother"),
/// depending on the template that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relationship {
    Pair(String, String),
    Triple(String, String, String),
}

impl Relationship {
    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::Pair(a.into(), b.into())
    }

    pub fn triple(a: impl Into<String>, b: impl Into<String>, relation: impl Into<String>) -> Self {
        Self::Triple(a.into(), b.into(), relation.into())
    }

    pub fn first(&self) -> &str {
        match self {
            Self::Pair(a, _) | Self::Triple(a, _, _) => a,
        }
    }

    pub fn second(&self) -> &str {
        match self {
            Self::Pair(_, b) | Self::Triple(_, b, _) => b,
        }
    }

    pub fn involves_redacted(&self) -> bool {
        self.first() == REDACTED || self.second() == REDACTED
    }
}

/// Elements are escaped, so a name that spans a line break still renders
/// on one line (`'Jane\nSmith'`).
impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair(a, b) => write!(f, "('{}', '{}')", a.escape_debug(), b.escape_debug()),
            Self::Triple(a, b, r) => write!(
                f,
                "('{}', '{}', '{}')",
                a.escape_debug(),
                b.escape_debug(),
                r.escape_debug()
            ),
        }
    }
}
