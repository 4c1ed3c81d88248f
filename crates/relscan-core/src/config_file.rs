use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub documents: Option<DocumentsConfig>,
    pub output: Option<OutputConfig>,
    pub scan: Option<ScanConfig>,
    pub structured: Option<StructuredConfig>,
    pub names: Option<NamesConfig>,
    pub relationships: Option<RelationshipsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentsConfig {
    pub paths: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub sample_dir: Option<String>,
    pub sample_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub max_bytes: Option<usize>,
    pub min_run_len: Option<usize>,
    pub sample_display_chars: Option<usize>,
    pub name_display_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredConfig {
    pub header_exclusion: Option<f32>,
    pub footer_exclusion: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamesConfig {
    /// Appended to the active profile's stoplist.
    pub extra_stopwords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipsConfig {
    /// Replaces the keyword vocabulary used by the byte-scan report.
    pub keywords: Option<Vec<String>>,
}

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Platform config directory path: `<config_dir>/relscan/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("relscan").join("config.toml"))
}

/// Load config by cascading CWD `.relscan.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    load_layered(config_path().as_deref(), Path::new(".relscan.toml"))
}

/// Overlay `local` on `platform`. Either file may be absent or unparseable,
/// in which case it contributes nothing.
pub fn load_layered(platform: Option<&Path>, local: &Path) -> ConfigFile {
    let platform = platform.and_then(load_from_path);
    let cwd = load_from_path(local);

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Load a config the user asked for by name. Unlike [`load_from_path`],
/// a missing or malformed file is an error.
pub fn load_required(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn pick<S, T>(overlay: &Option<S>, base: &Option<S>, field: impl Fn(&S) -> Option<T>) -> Option<T> {
    overlay
        .as_ref()
        .and_then(&field)
        .or_else(|| base.as_ref().and_then(&field))
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        documents: Some(DocumentsConfig {
            paths: pick(&overlay.documents, &base.documents, |d| d.paths.clone()),
        }),
        output: Some(OutputConfig {
            sample_dir: pick(&overlay.output, &base.output, |o| o.sample_dir.clone()),
            sample_chars: pick(&overlay.output, &base.output, |o| o.sample_chars),
        }),
        scan: Some(ScanConfig {
            max_bytes: pick(&overlay.scan, &base.scan, |s| s.max_bytes),
            min_run_len: pick(&overlay.scan, &base.scan, |s| s.min_run_len),
            sample_display_chars: pick(&overlay.scan, &base.scan, |s| s.sample_display_chars),
            name_display_limit: pick(&overlay.scan, &base.scan, |s| s.name_display_limit),
        }),
        structured: Some(StructuredConfig {
            header_exclusion: pick(&overlay.structured, &base.structured, |s| {
                s.header_exclusion
            }),
            footer_exclusion: pick(&overlay.structured, &base.structured, |s| {
                s.footer_exclusion
            }),
        }),
        names: Some(NamesConfig {
            extra_stopwords: pick(&overlay.names, &base.names, |n| n.extra_stopwords.clone()),
        }),
        relationships: Some(RelationshipsConfig {
            keywords: pick(&overlay.relationships, &base.relationships, |r| {
                r.keywords.clone()
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_chars_round_trip_toml() {
        let config = ConfigFile {
            output: Some(OutputConfig {
                sample_chars: Some(1200),
                ..Default::default()
            }),
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output.unwrap().sample_chars, Some(1200));
    }

    #[test]
    fn absent_section_deserializes_as_none() {
        let toml_str = "[scan]\nmax_bytes = 1024\n";
        let parsed: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(parsed.scan.unwrap().max_bytes, Some(1024));
        assert!(parsed.output.is_none());
        assert!(parsed.names.is_none());
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ConfigFile {
            scan: Some(ScanConfig {
                max_bytes: Some(100),
                min_run_len: Some(4),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overlay = ConfigFile {
            scan: Some(ScanConfig {
                max_bytes: Some(200),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge(base, overlay);
        let scan = merged.scan.unwrap();
        assert_eq!(scan.max_bytes, Some(200));
        assert_eq!(scan.min_run_len, Some(4));
    }

    #[test]
    fn merge_base_preserved_when_overlay_absent() {
        let base = ConfigFile {
            documents: Some(DocumentsConfig {
                paths: Some(vec!["a.pdf".into()]),
            }),
            ..Default::default()
        };
        let merged = merge(base, ConfigFile::default());
        assert_eq!(merged.documents.unwrap().paths.unwrap(), vec!["a.pdf"]);
    }

    #[test]
    fn load_required_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_required(&missing),
            Err(ConfigFileError::Read { .. })
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[scan\nmax_bytes = ").unwrap();
        assert!(matches!(
            load_required(&bad),
            Err(ConfigFileError::Parse { .. })
        ));
        assert!(load_from_path(&bad).is_none());

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[names]\nextra_stopwords = [\"Counsel\"]\n").unwrap();
        let parsed = load_required(&good).unwrap();
        assert_eq!(
            parsed.names.unwrap().extra_stopwords.unwrap(),
            vec!["Counsel"]
        );
    }

    #[test]
    fn local_file_overlays_platform_file() {
        let dir = tempfile::tempdir().unwrap();
        let platform = dir.path().join("config.toml");
        let local = dir.path().join(".relscan.toml");
        std::fs::write(
            &platform,
            "[scan]\nmax_bytes = 100\nmin_run_len = 4\n\n[output]\nsample_dir = \"/srv/samples\"\n",
        )
        .unwrap();
        std::fs::write(&local, "[scan]\nmax_bytes = 200\n").unwrap();

        let merged = load_layered(Some(platform.as_path()), &local);
        let scan = merged.scan.unwrap();
        assert_eq!(scan.max_bytes, Some(200));
        assert_eq!(scan.min_run_len, Some(4));
        assert_eq!(
            merged.output.unwrap().sample_dir.as_deref(),
            Some("/srv/samples")
        );
    }

    #[test]
    fn layered_load_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(".relscan.toml");
        assert_eq!(load_layered(None, &local), ConfigFile::default());

        std::fs::write(&local, "[output]\nsample_chars = 42\n").unwrap();
        let missing = dir.path().join("absent.toml");
        let loaded = load_layered(Some(missing.as_path()), &local);
        assert_eq!(loaded.output.unwrap().sample_chars, Some(42));
    }
}
