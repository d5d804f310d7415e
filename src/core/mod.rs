//! Core extraction engine.
//!
//! Source text flows through three stages:
//!
//! 1. **Extraction** (`extract`): PHP text → `ExtractionRecord`s
//! 2. **Cataloging** (`catalog`): records → deduplicated, ordered `Catalog`
//! 3. **Rendering** (`render`): `Catalog` + header metadata → POT document
//!
//! `pipeline` wires the stages together for in-memory sources; `context`
//! adds file discovery and parallel reading for the CLI.
//!
//! ## Module Structure
//!
//! - `catalog`: entries, domain filtering, first-encounter ordering
//! - `context`: config loading, file discovery and a full run
//! - `data`: source locations and line lookup
//! - `extract`: call recognition and literal decoding
//! - `file_scanner`: PHP file discovery with include/ignore patterns
//! - `pipeline`: `generate_pot` and the `Pipeline` fold
//! - `render`: POT serialization

pub mod catalog;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod pipeline;
pub mod render;

pub use catalog::{Catalog, CatalogEntry, DomainFilter, EntryKey, IngestOutcome};
pub use context::{ReadFailure, RunContext, RunOutput};
pub use data::{LineIndex, SourceLocation};
pub use pipeline::{
    Pipeline, PipelineStats, build_catalog, generate_pot, generate_pot_from_value,
};
pub use render::render_pot;
