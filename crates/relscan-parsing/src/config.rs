use regex::Regex;
use thiserror::Error;

/// Controls how a list of patterns/values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Which of the two name heuristics to run.
///
/// The structured and byte-scan analyses were tuned separately: they differ
/// in the minimum word length of the capitalization pattern and in their
/// stoplists. Both are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameProfile {
    /// `[A-Z][a-z]+` words; stoplist includes honorifics (Mr, Dr, ...).
    #[default]
    Structured,
    /// `[A-Z][a-z]{2,}` words; stoplist includes auxiliaries (Was, Would, ...).
    ByteScan,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("template {pattern:?} has {found} capture groups, expected {expected}")]
    GroupCount {
        pattern: String,
        found: usize,
        expected: &'static str,
    },
}

/// Configuration for name classification and relationship extraction.
///
/// All regex fields are `Option<Regex>` or `ListOverride`; unset means
/// "use the built-in default for the profile". Use [`ParsingConfigBuilder`]
/// to construct with string patterns.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    pub(crate) profile: NameProfile,

    // ── names.rs ──
    /// Replaces the profile's capitalization pattern.
    pub(crate) name_re: Option<Regex>,
    /// Exact-match (case-sensitive) words that are never names.
    pub(crate) stopwords: ListOverride<String>,
    /// Matches shorter than this many characters are dropped (default: 3).
    pub(crate) min_name_len: usize,

    // ── relationships.rs ──
    /// Two-entity templates; 2 or 3 capture groups each.
    pub(crate) relation_templates: ListOverride<Regex>,
    /// Templates with one slot fixed to `REDACTED`; 1 to 3 capture groups each.
    pub(crate) redacted_templates: ListOverride<Regex>,

    // ── keywords.rs ──
    /// Vocabulary for the substring keyword scan.
    pub(crate) keywords: ListOverride<String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self::for_profile(NameProfile::default())
    }
}

impl ParsingConfig {
    pub fn for_profile(profile: NameProfile) -> Self {
        Self {
            profile,
            name_re: None,
            stopwords: ListOverride::Default,
            min_name_len: 3,
            relation_templates: ListOverride::Default,
            redacted_templates: ListOverride::Default,
            keywords: ListOverride::Default,
        }
    }

    /// Defaults used by the structured (MuPDF) analysis.
    pub fn structured() -> Self {
        Self::for_profile(NameProfile::Structured)
    }

    /// Defaults used by the byte-scan analysis.
    pub fn byte_scan() -> Self {
        Self::for_profile(NameProfile::ByteScan)
    }

    pub fn profile(&self) -> NameProfile {
        self.profile
    }

    pub fn min_name_len(&self) -> usize {
        self.min_name_len
    }
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in [`build()`](Self::build).
/// Fails fast if any pattern is invalid or has the wrong number of groups.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    profile: NameProfile,
    name_re: Option<String>,
    stopwords: ListOverride<String>,
    min_name_len: Option<usize>,
    relation_templates: ListOverride<String>,
    redacted_templates: ListOverride<String>,
    keywords: ListOverride<String>,
}

fn push_extend<T>(list: &mut ListOverride<T>, values: impl IntoIterator<Item = T>) {
    match list {
        ListOverride::Extend(v) | ListOverride::Replace(v) => v.extend(values),
        ListOverride::Default => *list = ListOverride::Extend(values.into_iter().collect()),
    }
}

impl ParsingConfigBuilder {
    pub fn new(profile: NameProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    // ── Names ──

    pub fn name_regex(mut self, pattern: &str) -> Self {
        self.name_re = Some(pattern.to_string());
        self
    }

    pub fn set_stopwords(mut self, words: Vec<String>) -> Self {
        self.stopwords = ListOverride::Replace(words);
        self
    }

    pub fn add_stopwords(mut self, words: impl IntoIterator<Item = String>) -> Self {
        push_extend(&mut self.stopwords, words);
        self
    }

    pub fn min_name_len(mut self, n: usize) -> Self {
        self.min_name_len = Some(n);
        self
    }

    // ── Relationship templates ──

    pub fn set_relation_templates(mut self, patterns: Vec<String>) -> Self {
        self.relation_templates = ListOverride::Replace(patterns);
        self
    }

    pub fn add_relation_template(mut self, pattern: String) -> Self {
        push_extend(&mut self.relation_templates, [pattern]);
        self
    }

    pub fn set_redacted_templates(mut self, patterns: Vec<String>) -> Self {
        self.redacted_templates = ListOverride::Replace(patterns);
        self
    }

    pub fn add_redacted_template(mut self, pattern: String) -> Self {
        push_extend(&mut self.redacted_templates, [pattern]);
        self
    }

    // ── Keywords ──

    pub fn set_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = ListOverride::Replace(keywords);
        self
    }

    pub fn add_keyword(mut self, keyword: String) -> Self {
        push_extend(&mut self.keywords, [keyword]);
        self
    }

    /// Compile all string patterns into regexes and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, ConfigError> {
        let compile_templates = |list: ListOverride<String>,
                                 groups: std::ops::RangeInclusive<usize>,
                                 expected: &'static str|
         -> Result<ListOverride<Regex>, ConfigError> {
            let compile_all = |patterns: Vec<String>| -> Result<Vec<Regex>, ConfigError> {
                patterns
                    .iter()
                    .map(|p| -> Result<Regex, ConfigError> {
                        let re = Regex::new(p)?;
                        let found = re.captures_len() - 1;
                        if !groups.contains(&found) {
                            return Err(ConfigError::GroupCount {
                                pattern: p.clone(),
                                found,
                                expected,
                            });
                        }
                        Ok(re)
                    })
                    .collect()
            };
            Ok(match list {
                ListOverride::Default => ListOverride::Default,
                ListOverride::Replace(v) => ListOverride::Replace(compile_all(v)?),
                ListOverride::Extend(v) => ListOverride::Extend(compile_all(v)?),
            })
        };

        Ok(ParsingConfig {
            profile: self.profile,
            name_re: self.name_re.map(|p| Regex::new(&p)).transpose()?,
            stopwords: self.stopwords,
            min_name_len: self.min_name_len.unwrap_or(3),
            relation_templates: compile_templates(self.relation_templates, 2..=3, "2 or 3")?,
            redacted_templates: compile_templates(self.redacted_templates, 1..=3, "1 to 3")?,
            keywords: self.keywords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParsingConfig::default();
        assert_eq!(config.profile(), NameProfile::Structured);
        assert_eq!(config.min_name_len(), 3);
        assert_eq!(ParsingConfig::byte_scan().profile(), NameProfile::ByteScan);
    }

    #[test]
    fn test_builder_basic() {
        let config = ParsingConfigBuilder::new(NameProfile::ByteScan)
            .min_name_len(4)
            .add_stopwords(["Counsel".to_string()])
            .build()
            .unwrap();
        assert_eq!(config.profile(), NameProfile::ByteScan);
        assert_eq!(config.min_name_len(), 4);
        assert!(matches!(config.stopwords, ListOverride::Extend(ref v) if v == &["Counsel"]));
    }

    #[test]
    fn test_builder_invalid_regex() {
        let result = ParsingConfigBuilder::new(NameProfile::Structured)
            .name_regex(r"[invalid")
            .build();
        assert!(matches!(result, Err(ConfigError::Regex(_))));
    }

    #[test]
    fn test_builder_rejects_wrong_group_count() {
        let result = ParsingConfigBuilder::default()
            .add_relation_template(r"([A-Z][a-z]+) likes".to_string())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::GroupCount { found: 1, .. })
        ));

        // One group is fine for redacted templates: it is paired with REDACTED.
        let ok = ParsingConfigBuilder::default()
            .add_redacted_template(r"(?i:REDACTED)\s+likes\s+([A-Z][a-z]+)".to_string())
            .build();
        assert!(ok.is_ok());

        let none = ParsingConfigBuilder::default()
            .add_redacted_template(r"(?i:REDACTED)\s+left".to_string())
            .build();
        assert!(matches!(none, Err(ConfigError::GroupCount { found: 0, .. })));
    }

    #[test]
    fn test_add_after_replace_keeps_replacement() {
        let config = ParsingConfigBuilder::default()
            .set_keywords(vec!["cousin".into()])
            .add_keyword("aunt".into())
            .build()
            .unwrap();
        assert_eq!(
            config.keywords.resolve(&["friend".to_string()]),
            vec!["cousin".to_string(), "aunt".to_string()]
        );
    }

    #[test]
    fn test_list_override_resolve() {
        let defaults = vec!["a".to_string(), "b".to_string()];

        let d: ListOverride<String> = ListOverride::Default;
        assert_eq!(d.resolve(&defaults), defaults);

        let r: ListOverride<String> = ListOverride::Replace(vec!["x".to_string()]);
        assert_eq!(r.resolve(&defaults), vec!["x".to_string()]);

        let e: ListOverride<String> = ListOverride::Extend(vec!["c".to_string()]);
        assert_eq!(
            e.resolve(&defaults),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
