//! Operation log lines.

use labelord_models::{Label, OperationKind, Verbosity};

/// What happened to one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    /// Written to GitHub.
    Success,
    /// Skipped because of a dry run.
    DryRun,
    /// Rejected, with the `<status> - <message>` description.
    Error(String),
}

impl OperationStatus {
    fn tag(&self) -> &'static str {
        match self {
            Self::Success => "SUC",
            Self::DryRun => "DRY",
            Self::Error(_) => "ERR",
        }
    }
}

/// One entry of a repository reconciliation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationLogEntry {
    /// A label write, attempted or simulated.
    Operation {
        kind: OperationKind,
        repository: String,
        label: Label,
        status: OperationStatus,
    },
    /// The repository labels could not be fetched.
    FetchError { repository: String, message: String },
}

impl OperationLogEntry {
    /// Is this entry an error.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::FetchError { .. }
                | Self::Operation {
                    status: OperationStatus::Error(_),
                    ..
                }
        )
    }

    /// Render the entry for the given verbosity, if it is shown at all.
    pub fn render(&self, verbosity: Verbosity) -> Option<String> {
        let (tag, status) = self.tags();
        match verbosity {
            Verbosity::Quiet => None,
            Verbosity::Normal if !self.is_error() => None,
            Verbosity::Normal => Some(format!("ERROR: {tag}; {}", self.details().join("; "))),
            Verbosity::Verbose => Some(format!("[{tag}][{status}] {}", self.details().join("; "))),
        }
    }

    fn tags(&self) -> (&'static str, &'static str) {
        match self {
            Self::Operation { kind, status, .. } => (kind.tag(), status.tag()),
            Self::FetchError { .. } => ("LBL", "ERR"),
        }
    }

    fn details(&self) -> Vec<&str> {
        match self {
            Self::Operation {
                repository,
                label,
                status,
                ..
            } => {
                let mut details = vec![repository.as_str(), label.name(), label.color()];
                if let OperationStatus::Error(message) = status {
                    details.push(message.as_str());
                }
                details
            }
            Self::FetchError {
                repository,
                message,
            } => vec![repository.as_str(), message.as_str()],
        }
    }
}

/// Final summary line.
pub fn render_summary(verbosity: Verbosity, total_errors: usize, repositories: usize) -> String {
    let prefix = match verbosity {
        Verbosity::Verbose => "[SUMMARY]",
        Verbosity::Normal | Verbosity::Quiet => "SUMMARY:",
    };

    if total_errors > 0 {
        format!("{prefix} {total_errors} error(s) in total, please check log above")
    } else {
        format!("{prefix} {repositories} repo(s) updated successfully")
    }
}
