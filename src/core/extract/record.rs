//! Extraction records: the handoff between extraction and the catalog.

use crate::core::SourceLocation;

/// One recognized translation call found in a source file.
///
/// # Lifecycle
///
/// 1. **Extraction**: created by `CallExtractor` for each call whose text
///    arguments are all string literals
/// 2. **Cataloging**: folded into a `Catalog` via `Catalog::ingest`, which
///    applies domain filtering and deduplication
///
/// # Examples
///
/// ```ignore
/// // _x( "Name", "the name", "test" ) on line 3 of inc/form.php
/// ExtractionRecord {
///     location: SourceLocation::new("inc/form.php", 3),
///     primary_text: "Name".into(),
///     plural_text: None,
///     context: Some("the name".into()),
///     domain_token: Some("test".into()),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// Where the call's function name starts.
    pub location: SourceLocation,

    /// Decoded singular text. Always comes from a string literal.
    pub primary_text: String,

    /// Decoded plural text, for the `_n` family.
    pub plural_text: Option<String>,

    /// Decoded context, for the `_x` family.
    pub context: Option<String>,

    /// Raw domain argument, not decoded.
    ///
    /// Quotes are stripped when the argument is a literal (`'test'` → `test`);
    /// variables and constants are kept as written (`$test`, `TEST`).
    /// `None` when the call omits the domain argument.
    pub domain_token: Option<String>,
}

impl ExtractionRecord {
    pub fn new(location: SourceLocation, primary_text: impl Into<String>) -> Self {
        Self {
            location,
            primary_text: primary_text.into(),
            plural_text: None,
            context: None,
            domain_token: None,
        }
    }

    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural_text = Some(plural.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain_token = Some(domain.into());
        self
    }
}
