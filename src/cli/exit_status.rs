use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and produced its output
/// - `Failure` (1): Command completed but nothing was extracted, a source
///   could not be read, or `init` found an existing config
/// - `Error` (2): Command failed (invalid config, unwritable output, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::InitSummary;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn exit_status_from_result() {
        let ok = CommandResult::init(InitSummary {
            created: true,
            error: None,
        });
        assert_eq!(ExitStatus::from(&ok), ExitStatus::Success);

        let existing = CommandResult::init(InitSummary {
            created: false,
            error: Some("exists".into()),
        });
        assert_eq!(ExitStatus::from(&existing), ExitStatus::Failure);
    }
}
