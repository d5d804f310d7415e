use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::{
    cli::args::ExtractArgs,
    config::{Config, HeadersOption, load_config},
    core::{
        Catalog,
        extract::{FileExtraction, SkippedCall, extract_calls},
        file_scanner::scan_files,
        pipeline::{Pipeline, PipelineStats},
        render::HeaderConfig,
    },
};

/// Environment variable pinning `POT-Creation-Date` for reproducible builds.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub file_path: String,
    pub error: String,
}

/// Everything a finished run produced.
pub struct RunOutput {
    pub catalog: Catalog,
    pub stats: PipelineStats,
    pub read_failures: Vec<ReadFailure>,
    pub skipped_calls: Vec<SkippedCall>,
}

/// Run context for one extraction.
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--domain my-plugin`)
/// 2. `.wppotrc.json` config file
/// 3. Built-in defaults
pub struct RunContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory. Occurrence paths are relative to it.
    pub root_dir: PathBuf,

    /// PHP files to extract, sorted.
    pub files: Vec<PathBuf>,

    /// Paths the scanner could not access.
    pub skipped_paths: usize,

    /// Where the template goes; `None` for stdout.
    pub destination: Option<PathBuf>,

    /// Fixed `POT-Creation-Date`, from `SOURCE_DATE_EPOCH`.
    pub creation_date: Option<OffsetDateTime>,
}

impl RunContext {
    /// Create a new `RunContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is unreadable or invalid
    /// - `SOURCE_DATE_EPOCH` is set but is not a unix timestamp
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let root_dir = args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::info!("No .wppotrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, args);
        config.validate()?;

        let scan_result = scan_files(&root_dir, &config.includes, &config.ignores);
        if scan_result.skipped_count > 0 {
            tracing::debug!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        let destination = if args.stdout {
            None
        } else {
            Some(
                args.dest_file
                    .clone()
                    .unwrap_or_else(|| root_dir.join(&config.dest_file)),
            )
        };

        let creation_date = parse_source_date_epoch(std::env::var(SOURCE_DATE_EPOCH).ok())?;

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files.into_iter().collect(),
            skipped_paths: scan_result.skipped_count,
            destination,
            creation_date,
        })
    }

    /// Path of `path` relative to the root, as written in references.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }

    pub fn header_config(&self) -> HeaderConfig {
        HeaderConfig {
            creation_date: self.creation_date,
            ..self.config.header_config()
        }
    }

    /// Read and extract every file, then fold the results into a catalog.
    ///
    /// Reading and extraction run in parallel. The fold is sequential in
    /// sorted path order, so the catalog does not depend on scheduling.
    pub fn run(&self) -> RunOutput {
        let extractions: Vec<(String, Result<FileExtraction, String>)> = self
            .files
            .par_iter()
            .map(|path| {
                let display_path = self.display_path(path);
                let extraction = fs::read_to_string(path)
                    .map(|text| extract_calls(&display_path, &text))
                    .map_err(|e| e.to_string());
                (display_path, extraction)
            })
            .collect();

        let mut pipeline = Pipeline::new(self.header_config(), self.config.domain_filter());
        let mut read_failures = Vec::new();
        let mut skipped_calls = Vec::new();

        for (file_path, extraction) in extractions {
            match extraction {
                Ok(extraction) => {
                    skipped_calls.extend(extraction.skipped.iter().cloned());
                    pipeline.add_extraction(extraction);
                }
                Err(error) => {
                    tracing::warn!("Cannot read {}: {}", file_path, error);
                    read_failures.push(ReadFailure { file_path, error });
                }
            }
        }

        RunOutput {
            stats: pipeline.stats(),
            catalog: pipeline.finish(),
            read_failures,
            skipped_calls,
        }
    }
}

fn apply_overrides(config: &mut Config, args: &ExtractArgs) {
    if let Some(domain) = &args.domain {
        config.domain = Some(domain.clone());
    }
    if let Some(package) = &args.package {
        config.package = Some(package.clone());
    }
    if let Some(bug_report) = &args.bug_report {
        config.bug_report = bug_report.clone();
    }
    if let Some(last_translator) = &args.last_translator {
        config.last_translator = last_translator.clone();
    }
    if let Some(team) = &args.team {
        config.team = team.clone();
    }

    if args.no_headers {
        config.headers = HeadersOption::Enabled(false);
    } else if !args.headers.is_empty() {
        let mut custom = match std::mem::take(&mut config.headers) {
            HeadersOption::Custom(map) => map,
            HeadersOption::Enabled(_) => Map::new(),
        };
        for (name, value) in &args.headers {
            custom.insert(name.clone(), Value::String(value.clone()));
        }
        config.headers = HeadersOption::Custom(custom);
    }
}

/// Parse a `SOURCE_DATE_EPOCH` value into a UTC timestamp.
pub fn parse_source_date_epoch(value: Option<String>) -> Result<Option<OffsetDateTime>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let seconds: i64 = value
        .parse()
        .with_context(|| anyhow!("Invalid {}: {:?}", SOURCE_DATE_EPOCH, value))?;
    let date = OffsetDateTime::from_unix_timestamp(seconds)
        .with_context(|| anyhow!("{} out of range: {}", SOURCE_DATE_EPOCH, seconds))?;
    Ok(Some(date))
}
