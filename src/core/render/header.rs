use time::OffsetDateTime;

use crate::core::extract::functions::keywords_list;

pub const DEFAULT_PACKAGE: &str = "unnamed project";
pub const DEFAULT_BUG_REPORT: &str = "http://example.com";
pub const DEFAULT_LAST_TRANSLATOR: &str = "FULL NAME <EMAIL@ADDRESS>";
pub const DEFAULT_TEAM: &str = "LANGUAGE <EMAIL@ADDRESS>";

/// Placeholder gettext tools expect in a template's `PO-Revision-Date`.
const REVISION_DATE_PLACEHOLDER: &str = "YEAR-MO-DA HO:MI+ZONE";

/// Header names the template always writes itself.
const RESERVED_HEADERS: [&str; 14] = [
    "Project-Id-Version",
    "Report-Msgid-Bugs-To",
    "POT-Creation-Date",
    "PO-Revision-Date",
    "Last-Translator",
    "Language-Team",
    "MIME-Version",
    "Content-Type",
    "Content-Transfer-Encoding",
    "X-Poedit-Basepath",
    "X-Poedit-SourceCharset",
    "X-Poedit-KeywordsList",
    "X-Poedit-SearchPath-0",
    "X-Textdomain-Support",
];

/// Whether `name` is a header the template writes itself. Case-insensitive.
pub fn is_reserved_header(name: &str) -> bool {
    RESERVED_HEADERS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// Which header metadata to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Required core headers plus Poedit/extension headers and custom headers.
    #[default]
    Full,
    /// Required core headers only.
    Minimal,
}

/// Header metadata for a rendered POT document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Project name, used in `Project-Id-Version` and the copyright preamble.
    pub package: String,
    pub bug_report: String,
    pub last_translator: String,
    pub team: String,
    pub mode: HeaderMode,
    /// Extra `Name: value` headers, in the order supplied. Full mode only.
    /// Reserved names are dropped.
    pub custom: Vec<(String, String)>,
    /// Fixed `POT-Creation-Date`; the current UTC time when unset.
    pub creation_date: Option<OffsetDateTime>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            bug_report: DEFAULT_BUG_REPORT.to_string(),
            last_translator: DEFAULT_LAST_TRANSLATOR.to_string(),
            team: DEFAULT_TEAM.to_string(),
            mode: HeaderMode::Full,
            custom: Vec::new(),
            creation_date: None,
        }
    }
}

impl HeaderConfig {
    pub fn creation_date(&self) -> OffsetDateTime {
        self.creation_date.unwrap_or_else(OffsetDateTime::now_utc)
    }

    /// Comment lines preceding the header entry.
    pub fn preamble(&self, date: OffsetDateTime) -> [String; 2] {
        [
            format!("# Copyright (C) {} {}", date.year(), self.package),
            format!(
                "# This file is distributed under the same license as the {} package.",
                self.package
            ),
        ]
    }

    /// Ordered `(name, value)` pairs for the header entry's msgstr.
    pub fn metadata(&self, date: OffsetDateTime) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = [
            ("Project-Id-Version", self.package.clone()),
            ("Report-Msgid-Bugs-To", self.bug_report.clone()),
            ("POT-Creation-Date", format_pot_date(date)),
            ("PO-Revision-Date", REVISION_DATE_PLACEHOLDER.to_string()),
            ("Last-Translator", self.last_translator.clone()),
            ("Language-Team", self.team.clone()),
            ("MIME-Version", "1.0".to_string()),
            ("Content-Type", "text/plain; charset=UTF-8".to_string()),
            ("Content-Transfer-Encoding", "8bit".to_string()),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        if self.mode == HeaderMode::Minimal {
            return fields;
        }

        fields.extend(
            [
                ("X-Poedit-Basepath", "..".to_string()),
                ("X-Poedit-SourceCharset", "UTF-8".to_string()),
                ("X-Poedit-KeywordsList", keywords_list()),
                ("X-Poedit-SearchPath-0", ".".to_string()),
                ("X-Textdomain-Support", "yes".to_string()),
            ]
            .into_iter()
            .map(|(name, value)| (name.to_string(), value)),
        );
        fields.extend(
            self.custom
                .iter()
                .filter(|(name, _)| !is_reserved_header(name))
                .cloned(),
        );
        fields
    }
}

/// Format a timestamp the way gettext tools do: `2015-06-03 14:05+0000`.
pub fn format_pot_date(date: OffsetDateTime) -> String {
    let offset = date.offset();
    let (hours, minutes, _) = offset.as_hms();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}{}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
        if offset.is_negative() { '-' } else { '+' },
        hours.unsigned_abs(),
        minutes.unsigned_abs(),
    )
}
