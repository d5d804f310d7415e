//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow wp-pot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result.
///
/// When the template itself went to stdout the report goes to stderr so
/// the two never mix.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) if summary.destination.is_none() => {
            print_to(result, verbose, &mut io::stderr().lock())
        }
        _ => print_to(result, verbose, &mut io::stdout().lock()),
    }
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract_to(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    for failure in &summary.read_failures {
        let _ = writeln!(
            writer,
            "{} cannot read {}: {}",
            "warning:".bold().yellow(),
            failure.file_path,
            failure.error
        );
    }

    if summary.skipped_paths > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors",
            "warning:".bold().yellow(),
            summary.skipped_paths
        );
    }

    if verbose {
        for skipped in &summary.skipped_calls {
            let _ = writeln!(
                writer,
                "{} skipped {}() at {}: {}",
                "note:".bold(),
                skipped.function,
                skipped.location.reference(),
                skipped.reason
            );
        }
    } else if !summary.skipped_calls.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} call(s) could not be extracted statically (use {} for details)",
            "warning:".bold().yellow(),
            summary.skipped_calls.len(),
            "-v".cyan()
        );
    }

    let files = format!(
        "{} {}",
        summary.files_scanned,
        plural(summary.files_scanned, "file", "files")
    );

    if summary.entry_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("No translatable strings found in {}", files).red()
        );
        return;
    }

    let target = match &summary.destination {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} to {}",
            summary.entry_count,
            plural(summary.entry_count, "string", "strings"),
            files,
            target
        )
        .green()
    );

    if verbose && summary.stats.domain_mismatches > 0 {
        let _ = writeln!(
            writer,
            "{} {} call(s) excluded by the domain filter",
            "note:".bold(),
            summary.stats.domain_mismatches
        );
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
        }
        None if summary.created => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        None => {}
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        PipelineStats, ReadFailure, SourceLocation,
        extract::{SkipReason, SkippedCall},
    };

    fn render(result: &CommandResult, verbose: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_to(result, verbose, &mut out);
        String::from_utf8(out).unwrap()
    }

    fn summary(entry_count: usize) -> ExtractSummary {
        ExtractSummary {
            files_scanned: 2,
            skipped_paths: 0,
            entry_count,
            stats: PipelineStats::default(),
            destination: Some(PathBuf::from("translations.pot")),
            read_failures: Vec::new(),
            skipped_calls: Vec::new(),
        }
    }

    #[test]
    fn test_success_line() {
        let out = render(&CommandResult::extract(summary(3)), false);
        assert_eq!(
            out,
            "\u{2713} Extracted 3 strings from 2 files to translations.pot\n"
        );
    }

    #[test]
    fn test_empty_catalog_line() {
        let out = render(&CommandResult::extract(summary(0)), false);
        assert_eq!(out, "\u{2718} No translatable strings found in 2 files\n");
    }

    #[test]
    fn test_skipped_calls() {
        let mut summary = summary(1);
        summary.skipped_calls.push(SkippedCall {
            location: SourceLocation::new("inc/a.php", 4),
            function: "__",
            reason: SkipReason::NotLiteral(crate::core::extract::ArgumentRole::PrimaryText),
        });
        summary.read_failures.push(ReadFailure {
            file_path: "b.php".into(),
            error: "denied".into(),
        });
        let result = CommandResult::extract(summary);

        let quiet = render(&result, false);
        assert!(quiet.contains("warning: cannot read b.php: denied\n"));
        assert!(quiet.contains("warning: 1 call(s) could not be extracted statically"));

        let verbose = render(&result, true);
        assert!(
            verbose.contains("note: skipped __() at inc/a.php:4: text argument is not a string literal\n")
        );
    }

    #[test]
    fn test_skipped_paths_warning() {
        let mut summary = summary(1);
        summary.skipped_paths = 2;
        let out = render(&CommandResult::extract(summary), false);
        assert_eq!(
            out,
            "warning: 2 path(s) skipped due to access errors\n\
             \u{2713} Extracted 1 string from 2 files to translations.pot\n"
        );
    }
}
