//! Presence audit over a checklist.
//!
//! Probing fills an [`AuditReport`]; rendering happens in [`crate::render`].
//! A missing file is a result, not an error - the audit itself is
//! infallible.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checklist::{CheckItem, REQUIRED_FILES};
use crate::error::{PreflightError, PreflightResult};

/// Outcome of probing a single checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Present,
    Missing,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Present => write!(f, "✓"),
            CheckStatus::Missing => write!(f, "✗"),
        }
    }
}

/// One probed checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub item: CheckItem,
    pub status: CheckStatus,
}

/// Audit results, in checklist order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    pub results: Vec<CheckResult>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn present(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == CheckStatus::Present)
            .count()
    }

    pub fn missing(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == CheckStatus::Missing)
            .count()
    }

    /// True iff every checklist path existed at audit time.
    ///
    /// Vacuously true for an empty checklist.
    pub fn is_success(&self) -> bool {
        self.missing() == 0
    }
}

/// Audit the standard checklist against `root`.
pub fn run_audit(root: &Path) -> AuditReport {
    run_checklist(root, &REQUIRED_FILES)
}

/// Audit an arbitrary checklist against `root`.
///
/// Existence-only test: a directory at a listed path counts as present,
/// and probe faults (permission denied, traversal through a
/// non-directory) collapse to missing.
pub fn run_checklist(root: &Path, items: &[CheckItem]) -> AuditReport {
    let mut report = AuditReport::new();

    for item in items {
        let status = if root.join(item.path).exists() {
            CheckStatus::Present
        } else {
            CheckStatus::Missing
        };
        report.results.push(CheckResult {
            item: *item,
            status,
        });
    }

    report
}

/// Resolve the audit root: an explicit `--root`, or the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> PreflightResult<PathBuf> {
    match root {
        Some(path) => {
            if path.is_dir() {
                Ok(path)
            } else {
                Err(PreflightError::RootNotFound { path })
            }
        }
        None => Ok(std::env::current_dir()?),
    }
}
