//! POT rendering: header metadata, string escaping and document layout.
//!
//! ## Module Structure
//!
//! - `header`: `HeaderConfig` and the header metadata lines
//! - `escape`: POT string escaping and the multi-line field convention
//! - `pot`: the document renderer

pub mod escape;
pub mod header;
pub mod pot;

pub use escape::{escape_pot, write_field};
pub use header::{HeaderConfig, HeaderMode, format_pot_date, is_reserved_header};
pub use pot::render_pot;
