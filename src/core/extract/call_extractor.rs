//! Call extractor: finds recognized translation calls in PHP source text.
//!
//! Recognition keys only on a recognized function name immediately followed
//! by `(` (whitespace allowed in between). Statement position does not
//! matter, so calls nested as arguments of other calls are found too:
//!
//! ```php
//! sprintf( _n( "%s star", "%s stars", 3, "test" ), 3 );
//! ```
//!
//! No PHP parsing happens here. The closing parenthesis is located with the
//! depth/quote-aware scanner, arguments are split at top-level commas, and
//! each argument is mapped to a role from the function table.
//!
//! A call is skipped (never raised) when its parentheses are unbalanced, a
//! literal is unterminated, a text argument is missing, or a text argument is
//! not a string literal. Scanning always continues with the rest of the file.

use thiserror::Error;

use crate::core::extract::{
    ArgumentRole, ExtractionRecord, PhpLiteral, RecognizedFunction,
    functions::lookup,
    scanner::{find_matching_paren, split_arguments, unwrap_parens},
};
use crate::core::{LineIndex, SourceLocation};
use crate::utils::{is_ident_byte, is_ident_start};

/// Why a recognized call produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("unbalanced parentheses or unterminated string literal")]
    Unbalanced,
    #[error("missing {0} argument")]
    MissingArgument(ArgumentRole),
    #[error("{0} argument is not a string literal")]
    NotLiteral(ArgumentRole),
}

/// A recognized call that was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCall {
    pub location: SourceLocation,
    pub function: &'static str,
    pub reason: SkipReason,
}

/// Result of extracting a single file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    /// Extraction records in source order.
    pub records: Vec<ExtractionRecord>,
    /// Recognized calls that could not be extracted statically.
    pub skipped: Vec<SkippedCall>,
}

/// Scans one source text for recognized translation calls.
pub struct CallExtractor<'a> {
    file_path: &'a str,
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> CallExtractor<'a> {
    pub fn new(file_path: &'a str, source: &'a str) -> Self {
        Self {
            file_path,
            source,
            line_index: LineIndex::new(source),
        }
    }

    pub fn extract(self) -> FileExtraction {
        let bytes = self.source.as_bytes();
        let mut result = FileExtraction::default();
        let mut pos = 0;

        while pos < bytes.len() {
            if !is_ident_start(bytes[pos]) {
                pos += 1;
                continue;
            }

            let start = pos;
            let end = identifier_end(bytes, start);
            // `$__(` is a variable call and `foo__(` a different function.
            let at_boundary =
                start == 0 || !(is_ident_byte(bytes[start - 1]) || bytes[start - 1] == b'$');
            // Resume right after the name so calls nested inside this call's
            // arguments are found even if this one is skipped.
            pos = end;

            if !at_boundary {
                continue;
            }
            let Some(func) = self.source.get(start..end).and_then(lookup) else {
                continue;
            };
            let Some(open) = open_paren_after(bytes, end) else {
                continue;
            };

            let location = SourceLocation::new(self.file_path, self.line_index.line_of(start));
            match self.extract_call(func, open, location.clone()) {
                Ok(record) => result.records.push(record),
                Err(reason) => {
                    tracing::debug!("skipping {}() at {}: {}", func.name, location, reason);
                    result.skipped.push(SkippedCall {
                        location,
                        function: func.name,
                        reason,
                    });
                }
            }
        }

        result
    }

    fn extract_call(
        &self,
        func: &RecognizedFunction,
        open: usize,
        location: SourceLocation,
    ) -> Result<ExtractionRecord, SkipReason> {
        let close = find_matching_paren(self.source, open).ok_or(SkipReason::Unbalanced)?;
        let args = split_arguments(&self.source[open + 1..close]);

        if args.len() < func.required_args() {
            return Err(SkipReason::MissingArgument(func.roles[args.len()]));
        }

        let mut primary_text = None;
        let mut plural_text = None;
        let mut context = None;
        let mut domain_token = None;

        for (&role, raw) in func.roles.iter().zip(&args) {
            let arg = unwrap_parens(raw);
            match role {
                ArgumentRole::PrimaryText => primary_text = Some(decode_text(arg, role)?),
                ArgumentRole::PluralText => plural_text = Some(decode_text(arg, role)?),
                ArgumentRole::Context => context = Some(decode_text(arg, role)?),
                ArgumentRole::Count => {}
                ArgumentRole::Domain => domain_token = Some(domain_token_of(arg)),
            }
        }

        let primary_text =
            primary_text.ok_or(SkipReason::MissingArgument(ArgumentRole::PrimaryText))?;

        Ok(ExtractionRecord {
            location,
            primary_text,
            plural_text,
            context,
            domain_token,
        })
    }
}

/// Extract every recognized call in `source`, attributing them to `file_path`.
///
/// # Examples
///
/// ```
/// use wp_pot::core::extract::extract_calls;
///
/// let result = extract_calls("test.php", r#"<?php _e( "Name", "test" ); ?>"#);
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.records[0].primary_text, "Name");
/// assert_eq!(result.records[0].domain_token.as_deref(), Some("test"));
/// ```
pub fn extract_calls(file_path: &str, source: &str) -> FileExtraction {
    CallExtractor::new(file_path, source).extract()
}

fn decode_text(arg: &str, role: ArgumentRole) -> Result<String, SkipReason> {
    PhpLiteral::parse(arg)
        .map(|literal| literal.decode())
        .ok_or(SkipReason::NotLiteral(role))
}

fn domain_token_of(arg: &str) -> String {
    match PhpLiteral::parse(arg) {
        Some(literal) => literal.body.to_string(),
        None => arg.to_string(),
    }
}

fn identifier_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }
    end
}

/// Position of the `(` following an identifier, skipping whitespace.
fn open_paren_after(bytes: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    (bytes.get(pos) == Some(&b'(')).then_some(pos)
}
