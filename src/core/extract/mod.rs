//! Extraction: file-level collection of translation calls.
//!
//! This module turns PHP source text into `ExtractionRecord`s, one per
//! recognized translation call whose text arguments are string literals.
//!
//! ## Module Structure
//!
//! - `scanner`: depth/quote-aware scanning and argument splitting
//! - `literal`: PHP single/double-quoted literal decoding
//! - `functions`: the recognized function table and argument roles
//! - `call_extractor`: finds calls and maps arguments to roles
//! - `record`: the extraction record handed to the catalog

pub mod call_extractor;
pub mod functions;
pub mod literal;
pub mod record;
pub mod scanner;


pub use call_extractor::{CallExtractor, FileExtraction, SkipReason, SkippedCall, extract_calls};
pub use functions::{ArgumentRole, RECOGNIZED_FUNCTIONS, RecognizedFunction};
pub use literal::{PhpLiteral, QuoteStyle, decode_literal};
pub use record::ExtractionRecord;
pub use scanner::{find_matching_paren, split_arguments, unwrap_parens};
