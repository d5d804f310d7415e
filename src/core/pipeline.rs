//! Library entry point: fold ordered `(path, text)` sources into a catalog
//! and render it as a POT document.
//!
//! Sources are processed strictly in the order given. Callers that extract
//! files in parallel hand the results to `Pipeline::add_extraction` in a
//! fixed order so the output stays deterministic.

use serde_json::Value;

use crate::config::{Config, ConfigError};
use crate::core::{
    Catalog, DomainFilter, IngestOutcome,
    extract::{FileExtraction, extract_calls},
    render::{HeaderConfig, render_pot},
};

/// Counters collected while folding sources into a catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub files: usize,
    /// Recognized calls that produced a record.
    pub calls: usize,
    /// Records that created or merged into an entry.
    pub accepted: usize,
    pub domain_mismatches: usize,
    pub empty_texts: usize,
    /// Recognized calls discarded during extraction.
    pub skipped_calls: usize,
}

/// A single run: one catalog, one domain filter.
pub struct Pipeline {
    catalog: Catalog,
    filter: DomainFilter,
    stats: PipelineStats,
}

impl Pipeline {
    pub fn new(header: HeaderConfig, filter: DomainFilter) -> Self {
        Self {
            catalog: Catalog::new(header),
            filter,
            stats: PipelineStats::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.header_config(), config.domain_filter())
    }

    /// Extract one source file and fold its records into the catalog.
    pub fn add_source(&mut self, path: &str, text: &str) {
        self.add_extraction(extract_calls(path, text));
    }

    /// Fold an already extracted file into the catalog.
    pub fn add_extraction(&mut self, extraction: FileExtraction) {
        self.stats.files += 1;
        self.stats.skipped_calls += extraction.skipped.len();

        for record in extraction.records {
            self.stats.calls += 1;
            match self.catalog.ingest(record, &self.filter) {
                IngestOutcome::Inserted | IngestOutcome::Merged => self.stats.accepted += 1,
                IngestOutcome::DomainMismatch => self.stats.domain_mismatches += 1,
                IngestOutcome::EmptyText => self.stats.empty_texts += 1,
            }
        }
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn render(&self) -> String {
        render_pot(&self.catalog)
    }

    pub fn finish(self) -> Catalog {
        self.catalog
    }
}

/// Fold `sources` into a fresh catalog configured by `config`.
pub fn build_catalog<I, P, T>(sources: I, config: &Config) -> Catalog
where
    I: IntoIterator<Item = (P, T)>,
    P: AsRef<str>,
    T: AsRef<str>,
{
    let mut pipeline = Pipeline::from_config(config);
    for (path, text) in sources {
        pipeline.add_source(path.as_ref(), text.as_ref());
    }
    pipeline.finish()
}

/// Generate a POT document from ordered `(path, text)` sources.
///
/// # Examples
///
/// ```
/// use wp_pot::config::Config;
/// use wp_pot::core::generate_pot;
///
/// let config = Config {
///     domain: Some("test".into()),
///     ..Default::default()
/// };
/// let pot = generate_pot([("test.php", r#"<?php _e( "Name", "test" ); ?>"#)], &config);
/// assert!(pot.contains("#: test.php:1\nmsgid \"Name\"\nmsgstr \"\"\n"));
/// ```
pub fn generate_pot<I, P, T>(sources: I, config: &Config) -> String
where
    I: IntoIterator<Item = (P, T)>,
    P: AsRef<str>,
    T: AsRef<str>,
{
    render_pot(&build_catalog(sources, config))
}

/// Like `generate_pot`, but validates a raw JSON options value first.
///
/// A value that is not a JSON object fails before any source is read.
pub fn generate_pot_from_value<I, P, T>(sources: I, options: Value) -> Result<String, ConfigError>
where
    I: IntoIterator<Item = (P, T)>,
    P: AsRef<str>,
    T: AsRef<str>,
{
    let config = Config::from_value(options)?;
    Ok(generate_pot(sources, &config))
}
