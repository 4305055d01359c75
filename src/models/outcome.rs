use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,
    /// Job was not loaded or `launchctl` refused; treated as success.
    NotRunning(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripOutcome {
    Stripped {
        backup: Option<PathBuf>,
        lines_removed: usize,
    },
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Fail,
    Skip,
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "✓",
            Status::Warn => "⚠",
            Status::Fail => "✗",
            Status::Skip => "-",
        };
        write!(f, "{}", s)
    }
}

/// One line of the closing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub item: String,
    pub status: Status,
    pub detail: String,
}

impl StepRecord {
    pub fn removal(item: &str, outcome: &RemovalOutcome) -> Self {
        let (status, detail) = match outcome {
            RemovalOutcome::Removed => (Status::Ok, "removed".to_string()),
            RemovalOutcome::NotFound => (Status::Warn, "not found".to_string()),
            RemovalOutcome::Failed(e) => (Status::Fail, format!("failed: {}", e)),
        };
        Self { item: item.to_string(), status, detail }
    }

    pub fn stop(item: &str, outcome: &StopOutcome) -> Self {
        let (status, detail) = match outcome {
            StopOutcome::Stopped => (Status::Ok, "stopped".to_string()),
            StopOutcome::NotRunning(why) => (Status::Warn, format!("not running ({})", why)),
            StopOutcome::NotFound => (Status::Warn, "not found".to_string()),
        };
        Self { item: item.to_string(), status, detail }
    }

    pub fn strip(item: &str, outcome: &StripOutcome) -> Self {
        let (status, detail) = match outcome {
            StripOutcome::Stripped { backup: Some(b), lines_removed } => (
                Status::Ok,
                format!("{} lines removed, backup at {}", lines_removed, b.display()),
            ),
            StripOutcome::Stripped { backup: None, lines_removed } => (
                Status::Warn,
                format!("{} lines removed, no backup", lines_removed),
            ),
            StripOutcome::Failed(e) => (Status::Fail, format!("failed: {}", e)),
        };
        Self { item: item.to_string(), status, detail }
    }

    pub fn skipped(item: &str, detail: &str) -> Self {
        Self {
            item: item.to_string(),
            status: Status::Skip,
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct UninstallReport {
    pub steps: Vec<StepRecord>,
}

impl UninstallReport {
    pub fn push(&mut self, record: StepRecord) {
        log::debug!("{} {}: {}", record.status, record.item, record.detail);
        self.steps.push(record);
    }

    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| s.status == Status::Fail).count()
    }
}
