//! The fixed table of recognized translation functions.

use std::fmt;

/// Semantic role of a positional argument in a translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentRole {
    /// The singular source text (msgid).
    PrimaryText,
    /// The plural source text (msgid_plural).
    PluralText,
    /// The number used to select a plural form. Never stored.
    Count,
    /// Disambiguating context (msgctxt).
    Context,
    /// Text domain. Always last, and may be omitted by a call.
    Domain,
}

impl ArgumentRole {
    /// Roles whose argument must be a string literal for the call to count.
    pub fn requires_literal(self) -> bool {
        matches!(self, Self::PrimaryText | Self::PluralText | Self::Context)
    }
}

impl fmt::Display for ArgumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrimaryText => "text",
            Self::PluralText => "plural",
            Self::Count => "count",
            Self::Context => "context",
            Self::Domain => "domain",
        };
        f.write_str(name)
    }
}

/// A translation function and the order of its arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct RecognizedFunction {
    pub name: &'static str,
    pub roles: &'static [ArgumentRole],
}

use ArgumentRole::{Context, Count, Domain, PluralText, PrimaryText};

const PLAIN: &[ArgumentRole] = &[PrimaryText, Domain];
const CONTEXTUAL: &[ArgumentRole] = &[PrimaryText, Context, Domain];
const PLURAL: &[ArgumentRole] = &[PrimaryText, PluralText, Count, Domain];
const PLURAL_CONTEXTUAL: &[ArgumentRole] = &[PrimaryText, PluralText, Count, Context, Domain];
const NOOP_PLURAL: &[ArgumentRole] = &[PrimaryText, PluralText, Domain];
const NOOP_PLURAL_CONTEXTUAL: &[ArgumentRole] = &[PrimaryText, PluralText, Context, Domain];

/// Every function the extractor recognizes.
pub const RECOGNIZED_FUNCTIONS: &[RecognizedFunction] = &[
    RecognizedFunction { name: "__", roles: PLAIN },
    RecognizedFunction { name: "_e", roles: PLAIN },
    RecognizedFunction { name: "_x", roles: CONTEXTUAL },
    RecognizedFunction { name: "_ex", roles: CONTEXTUAL },
    RecognizedFunction { name: "_n", roles: PLURAL },
    RecognizedFunction { name: "_nx", roles: PLURAL_CONTEXTUAL },
    RecognizedFunction { name: "_n_noop", roles: NOOP_PLURAL },
    RecognizedFunction { name: "_nx_noop", roles: NOOP_PLURAL_CONTEXTUAL },
    RecognizedFunction { name: "esc_attr__", roles: PLAIN },
    RecognizedFunction { name: "esc_attr_e", roles: PLAIN },
    RecognizedFunction { name: "esc_attr_x", roles: CONTEXTUAL },
    RecognizedFunction { name: "esc_html__", roles: PLAIN },
    RecognizedFunction { name: "esc_html_e", roles: PLAIN },
    RecognizedFunction { name: "esc_html_x", roles: CONTEXTUAL },
];

/// Look up a recognized function by its exact (case-sensitive) name.
pub fn lookup(name: &str) -> Option<&'static RecognizedFunction> {
    RECOGNIZED_FUNCTIONS.iter().find(|func| func.name == name)
}

impl RecognizedFunction {
    /// Number of leading arguments a call must supply.
    ///
    /// Everything up to the last literal role is required; `Count` and
    /// `Domain` after it may be omitted.
    pub fn required_args(&self) -> usize {
        self.roles
            .iter()
            .rposition(|role| role.requires_literal())
            .map_or(0, |i| i + 1)
    }

    /// Keyword spec in xgettext/Poedit notation, e.g. `_nx:1,2,4c`.
    pub fn keyword_spec(&self) -> String {
        let mut positions = Vec::new();
        for (i, role) in self.roles.iter().enumerate() {
            match role {
                PrimaryText | PluralText => positions.push((i + 1).to_string()),
                Context => positions.push(format!("{}c", i + 1)),
                Count | Domain => {}
            }
        }
        if positions.len() <= 1 {
            self.name.to_string()
        } else {
            format!("{}:{}", self.name, positions.join(","))
        }
    }
}

/// All keyword specs joined for the `X-Poedit-KeywordsList` header.
pub fn keywords_list() -> String {
    RECOGNIZED_FUNCTIONS
        .iter()
        .map(RecognizedFunction::keyword_spec)
        .collect::<Vec<_>>()
        .join(";")
}
