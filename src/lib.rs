//! wp-pot - gettext template extractor for WordPress PHP sources
//!
//! wp-pot is a CLI tool and library that scans PHP files for WordPress
//! translation calls (`__`, `_e`, `_x`, `_n`, `_nx_noop`, ...) and compiles
//! the extracted strings into a POT template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and validation
//! - `core`: Extraction, cataloging and POT rendering
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
