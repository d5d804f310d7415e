use std::path::PathBuf;

use crate::core::{PipelineStats, ReadFailure, extract::SkippedCall};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Number of PHP files found by the scanner.
    pub files_scanned: usize,
    /// Paths the scanner could not access.
    pub skipped_paths: usize,
    /// Number of entries in the written template.
    pub entry_count: usize,
    pub stats: PipelineStats,
    /// Output file; `None` when the template went to stdout.
    pub destination: Option<PathBuf>,
    pub read_failures: Vec<ReadFailure>,
    pub skipped_calls: Vec<SkippedCall>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running wp-pot commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Exit code 1 is returned when this is non-zero.
    pub error_count: usize,
}

impl CommandResult {
    pub fn extract(summary: ExtractSummary) -> Self {
        // An empty template and unreadable sources both fail the run.
        let error_count =
            summary.read_failures.len() + usize::from(summary.entry_count == 0);
        Self {
            summary: CommandSummary::Extract(summary),
            error_count,
        }
    }

    pub fn init(summary: InitSummary) -> Self {
        let error_count = usize::from(summary.error.is_some());
        Self {
            summary: CommandSummary::Init(summary),
            error_count,
        }
    }
}
