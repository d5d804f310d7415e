//! Catalog builder: merges extraction records into deduplicated entries.
//!
//! Entries are keyed by `(context, msgid)` and kept in first-encounter order
//! across the whole run. Occurrences within an entry keep insertion order too;
//! nothing is ever sorted, so output order depends only on the order in which
//! records are ingested.
//!
//! ## Module Structure
//!
//! - `entry`: `CatalogEntry` and its identity key
//! - `domain`: domain filtering

mod domain;
mod entry;

pub use domain::DomainFilter;
pub use entry::{CatalogEntry, EntryKey};

use std::collections::HashMap;

use crate::core::extract::ExtractionRecord;
use crate::core::render::HeaderConfig;

/// What `Catalog::ingest` did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A new entry was created.
    Inserted,
    /// The record was merged into an existing entry.
    Merged,
    /// The record's domain did not match the filter.
    DomainMismatch,
    /// The record's text was empty (the empty msgid is reserved for the header).
    EmptyText,
}

impl IngestOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Inserted | Self::Merged)
    }
}

/// Translation catalog for one run.
///
/// Pairs a key index with an insertion-ordered entry list so rendering order
/// is deterministic. Each run owns its own catalog; there is no global state.
#[derive(Debug, Default)]
pub struct Catalog {
    header: HeaderConfig,
    index: HashMap<EntryKey, usize>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(header: HeaderConfig) -> Self {
        Self {
            header,
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn header(&self) -> &HeaderConfig {
        &self.header
    }

    /// Entries in first-encounter order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, context: Option<&str>, msgid: &str) -> Option<&CatalogEntry> {
        let key = EntryKey::new(context.map(str::to_string), msgid);
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// Fold one record into the catalog, applying the domain filter first.
    pub fn ingest(&mut self, record: ExtractionRecord, filter: &DomainFilter) -> IngestOutcome {
        if !filter.accepts(record.domain_token.as_deref()) {
            tracing::trace!(
                "excluding \"{}\" at {}: domain {:?} does not match",
                record.primary_text,
                record.location,
                record.domain_token
            );
            return IngestOutcome::DomainMismatch;
        }
        if record.primary_text.is_empty() {
            tracing::debug!("excluding empty text at {}", record.location);
            return IngestOutcome::EmptyText;
        }
        self.upsert(record)
    }

    fn upsert(&mut self, record: ExtractionRecord) -> IngestOutcome {
        let ExtractionRecord {
            location,
            primary_text,
            plural_text,
            context,
            ..
        } = record;
        let key = EntryKey::new(context, primary_text);

        if let Some(&i) = self.index.get(&key) {
            let entry = &mut self.entries[i];
            entry.add_occurrence(location);
            if entry.plural.is_none() {
                entry.plural = plural_text;
            }
            return IngestOutcome::Merged;
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(CatalogEntry {
            context: key.context,
            msgid: key.msgid,
            plural: plural_text,
            occurrences: vec![location],
        });
        IngestOutcome::Inserted
    }
}
