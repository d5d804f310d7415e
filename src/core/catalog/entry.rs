use crate::core::SourceLocation;

/// Identity of a catalog entry: `(context, msgid)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub context: Option<String>,
    pub msgid: String,
}

impl EntryKey {
    pub fn new(context: Option<String>, msgid: impl Into<String>) -> Self {
        Self {
            context,
            msgid: msgid.into(),
        }
    }
}

/// A deduplicated translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub context: Option<String>,
    pub msgid: String,
    /// Set by the first record that supplies one; never overwritten.
    pub plural: Option<String>,
    /// Where the text was found, in insertion order.
    pub occurrences: Vec<SourceLocation>,
}

impl CatalogEntry {
    /// Record an occurrence unless the same path and line is already present.
    pub fn add_occurrence(&mut self, location: SourceLocation) {
        if !self.occurrences.contains(&location) {
            self.occurrences.push(location);
        }
    }
}
