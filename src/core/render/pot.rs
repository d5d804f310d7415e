//! POT document rendering.

use time::OffsetDateTime;

use super::escape::{escape_pot, write_field};
use crate::core::{Catalog, CatalogEntry};

/// Render `catalog` as a POT document.
///
/// The document is the header block followed by one blank-line separated
/// block per entry, in catalog order.
pub fn render_pot(catalog: &Catalog) -> String {
    let date = catalog.header().creation_date();
    let mut out = String::new();

    write_header(&mut out, catalog, date);
    for entry in catalog.entries() {
        out.push('\n');
        write_entry(&mut out, entry);
    }
    out
}

fn write_header(out: &mut String, catalog: &Catalog, date: OffsetDateTime) {
    let header = catalog.header();
    for line in header.preamble(date) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    for (name, value) in header.metadata(date) {
        out.push_str(&format!(
            "\"{}: {}\\n\"\n",
            escape_pot(&name),
            escape_pot(&value)
        ));
    }
}

fn write_entry(out: &mut String, entry: &CatalogEntry) {
    let references: Vec<String> = entry.occurrences.iter().map(|o| o.reference()).collect();
    out.push_str("#: ");
    out.push_str(&references.join(" "));
    out.push('\n');

    if let Some(context) = &entry.context {
        write_field(out, "msgctxt", context);
    }
    write_field(out, "msgid", &entry.msgid);

    match &entry.plural {
        Some(plural) => {
            write_field(out, "msgid_plural", plural);
            out.push_str("msgstr[0] \"\"\n");
            out.push_str("msgstr[1] \"\"\n");
        }
        None => out.push_str("msgstr \"\"\n"),
    }
}
