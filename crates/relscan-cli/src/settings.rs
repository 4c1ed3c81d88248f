use std::path::PathBuf;

use relscan_core::config_file::ConfigFile;
use relscan_ingest::{DEFAULT_MAX_BYTES, DEFAULT_MIN_RUN_LEN, DEFAULT_SAMPLE_CHARS, SourceOptions};
use relscan_parsing::{ConfigError, NameProfile, ParsingConfig, ParsingConfigBuilder};

/// The two transcripts analyzed when no paths are given anywhere.
const DEFAULT_DOCUMENTS: [&str; 2] = [
    "Interview Transcript - Maxwell 2025.07.24 (Redacted).pdf",
    "Interview Transcript - Maxwell 2025.07.25-cft (Redacted).pdf",
];

const DEFAULT_SAMPLE_DISPLAY_CHARS: usize = 2000;
const DEFAULT_NAME_DISPLAY_LIMIT: usize = 20;

/// Effective settings after layering config file values over defaults.
/// CLI flags are applied on top by the command functions.
#[derive(Debug, Clone)]
pub struct Settings {
    pub documents: Vec<PathBuf>,
    pub sample_dir: PathBuf,
    pub sample_chars: usize,
    pub sample_display_chars: usize,
    pub name_display_limit: usize,
    pub source: SourceOptions,
    pub extra_stopwords: Vec<String>,
    pub keywords: Option<Vec<String>>,
}

/// Default documents, looked up in the user's download directory.
pub fn default_documents() -> Vec<PathBuf> {
    let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    DEFAULT_DOCUMENTS.iter().map(|name| dir.join(name)).collect()
}

impl Settings {
    pub fn from_config(file: &ConfigFile) -> Self {
        let documents = file
            .documents
            .as_ref()
            .and_then(|d| d.paths.clone())
            .filter(|p| !p.is_empty())
            .map(|paths| paths.into_iter().map(PathBuf::from).collect())
            .unwrap_or_else(default_documents);

        let output = file.output.clone().unwrap_or_default();
        let scan = file.scan.clone().unwrap_or_default();
        let structured = file.structured.clone().unwrap_or_default();

        Self {
            documents,
            sample_dir: output
                .sample_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            sample_chars: output.sample_chars.unwrap_or(DEFAULT_SAMPLE_CHARS),
            sample_display_chars: scan
                .sample_display_chars
                .unwrap_or(DEFAULT_SAMPLE_DISPLAY_CHARS),
            name_display_limit: scan.name_display_limit.unwrap_or(DEFAULT_NAME_DISPLAY_LIMIT),
            source: SourceOptions {
                max_bytes: scan.max_bytes.unwrap_or(DEFAULT_MAX_BYTES),
                min_run_len: scan.min_run_len.unwrap_or(DEFAULT_MIN_RUN_LEN),
                header_exclusion: structured.header_exclusion.unwrap_or(0.0),
                footer_exclusion: structured.footer_exclusion.unwrap_or(0.0),
            },
            extra_stopwords: file
                .names
                .as_ref()
                .and_then(|n| n.extra_stopwords.clone())
                .unwrap_or_default(),
            keywords: file.relationships.as_ref().and_then(|r| r.keywords.clone()),
        }
    }

    /// Paths given on the command line win over configured documents.
    pub fn documents_or(&self, cli_paths: Vec<PathBuf>) -> Vec<PathBuf> {
        if cli_paths.is_empty() {
            self.documents.clone()
        } else {
            cli_paths
        }
    }

    pub fn parsing_config(&self, profile: NameProfile) -> Result<ParsingConfig, ConfigError> {
        let mut builder = ParsingConfigBuilder::new(profile);
        if !self.extra_stopwords.is_empty() {
            builder = builder.add_stopwords(self.extra_stopwords.iter().cloned());
        }
        if let Some(keywords) = &self.keywords {
            builder = builder.set_keywords(keywords.clone());
        }
        builder.build()
    }
}
