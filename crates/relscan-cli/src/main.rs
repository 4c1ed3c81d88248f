use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use relscan_core::config_file;
use relscan_ingest::{Strategy, TextSource, acquire, source_for, write_sample};
use relscan_parsing::{
    NameProfile, analyze_document, classify_names, count_redactions, keyword_hits,
};

mod output;
mod settings;

use output::ColorMode;
use settings::Settings;

/// Surface candidate names and relationship phrases in PDF transcripts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file to use instead of ~/.config/relscan/config.toml and ./.relscan.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract page text with MuPDF, list names and relationships, and save a text sample
    Analyze {
        /// PDF files to analyze (defaults to the configured documents)
        paths: Vec<PathBuf>,

        /// Directory for pdf<N>_sample.txt files
        #[arg(long)]
        sample_dir: Option<PathBuf>,

        /// Number of characters saved per sample
        #[arg(long)]
        sample_chars: Option<usize>,
    },

    /// Scan raw PDF bytes for readable text, names, redactions and relationship terms
    Scan {
        /// PDF files to scan (defaults to the configured documents)
        paths: Vec<PathBuf>,

        /// Number of bytes read from the start of each file
        #[arg(long)]
        max_bytes: Option<usize>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => config_file::load_required(path)?,
        None => config_file::load_config(),
    };
    let mut settings = Settings::from_config(&file);
    let color = ColorMode(!cli.no_color);

    match cli.command {
        Command::Analyze {
            paths,
            sample_dir,
            sample_chars,
        } => {
            if let Some(dir) = sample_dir {
                settings.sample_dir = dir;
            }
            if let Some(n) = sample_chars {
                settings.sample_chars = n;
            }
            let paths = settings.documents_or(paths);
            let source = source_for(Strategy::Structured, &settings.source)?;
            tracing::info!(documents = paths.len(), source = source.name(), "starting analysis");
            analyze(&paths, source.as_ref(), &settings, color, &mut std::io::stdout())
        }
        Command::Scan { paths, max_bytes } => {
            if let Some(n) = max_bytes {
                settings.source.max_bytes = n;
            }
            let paths = settings.documents_or(paths);
            let source = source_for(Strategy::ByteScan, &settings.source)?;
            tracing::info!(
                documents = paths.len(),
                source = source.name(),
                max_bytes = settings.source.max_bytes,
                "starting scan"
            );
            scan(&paths, source.as_ref(), &settings, color, &mut std::io::stdout())
        }
    }
}

/// Structured mode: names, relationships and a sample file per document.
/// `main` hands in the MuPDF source.
fn analyze(
    paths: &[PathBuf],
    source: &dyn TextSource,
    settings: &Settings,
    color: ColorMode,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let config = settings.parsing_config(NameProfile::Structured)?;

    for (i, path) in paths.iter().enumerate() {
        let index = i + 1;
        output::print_analyze_header(w, index, color)?;

        let doc = match acquire(path, source) {
            Ok(doc) => doc,
            Err(e) => {
                output::print_read_error(w, path, &e, color)?;
                continue;
            }
        };

        let analysis = analyze_document(&doc, &config);
        output::print_names(w, "Names found:", &analysis.names, None)?;
        writeln!(w)?;
        output::print_relationships(w, &analysis.relationships, color)?;

        write_sample(&settings.sample_dir, index, &doc, settings.sample_chars)
            .with_context(|| format!("failed to write text sample for {}", path.display()))?;
    }

    Ok(())
}

/// Byte-scan mode: printable runs, names, redaction count, keyword hits,
/// then the union of names across documents.
fn scan(
    paths: &[PathBuf],
    source: &dyn TextSource,
    settings: &Settings,
    color: ColorMode,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let config = settings.parsing_config(NameProfile::ByteScan)?;

    let mut all_names = BTreeSet::new();
    for (i, path) in paths.iter().enumerate() {
        output::print_scan_header(w, i + 1, path, color)?;

        let doc = match acquire(path, source) {
            Ok(doc) => doc,
            Err(e) => {
                output::print_read_error(w, path, &e, color)?;
                continue;
            }
        };

        output::print_text_sample(w, doc.sample(settings.sample_display_chars), color)?;

        let names = classify_names(doc.text(), &config);
        output::print_names(
            w,
            "Potential names extracted:",
            &names,
            Some(settings.name_display_limit),
        )?;
        output::print_scan_findings(
            w,
            count_redactions(doc.text()),
            &keyword_hits(doc.text(), &config),
        )?;

        all_names.extend(names);
    }

    output::print_summary(w, &all_names, color)?;
    Ok(())
}
