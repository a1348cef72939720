//! Per-item installation outcomes and the aggregate run report.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Terminal outcome for a single manifest item.
///
/// Every item makes exactly one transition out of its pending state; there
/// are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStatus {
    /// Template content was copied into a freshly created destination.
    Installed,
    /// Destination already existed, whatever its content. Nothing was
    /// written. This is the expected steady state on repeated runs.
    SkippedExists,
    /// Template source was absent. Nothing was written.
    SkippedMissingSource,
    /// A filesystem error stopped this item. The remaining items still ran.
    Failed,
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstallStatus::Installed => "installed",
            InstallStatus::SkippedExists => "skipped (exists)",
            InstallStatus::SkippedMissingSource => "skipped (missing template)",
            InstallStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Outcome of one manifest item, with the destination echoed back for
/// reporting.
#[derive(Debug, Clone, Serialize)]
pub struct InstallResult {
    pub destination: PathBuf,
    pub status: InstallStatus,
    /// Rendered error for `Failed` items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ordered results for a whole manifest run.
#[derive(Debug, Default, Serialize)]
pub struct InstallReport {
    results: Vec<InstallResult>,
}

impl InstallReport {
    pub fn push(&mut self, result: InstallResult) {
        self.results.push(result);
    }

    /// Results in manifest order.
    pub fn results(&self) -> &[InstallResult] {
        &self.results
    }

    pub fn installed(&self) -> usize {
        self.count(InstallStatus::Installed)
    }

    pub fn skipped_existing(&self) -> usize {
        self.count(InstallStatus::SkippedExists)
    }

    pub fn missing_sources(&self) -> usize {
        self.count(InstallStatus::SkippedMissingSource)
    }

    pub fn failures(&self) -> usize {
        self.count(InstallStatus::Failed)
    }

    /// True when at least one item hit a hard filesystem error. The overall
    /// run status must reflect this even though processing continued.
    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }

    fn count(&self, status: InstallStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}
