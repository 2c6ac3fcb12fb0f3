//! Skill Lint - Type Definitions
//!
//! Shared types for a lint run: rule violations, advisories, and the
//! final report handed back to the caller.

use serde::Serialize;
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────

/// A fatal rule violation. The first violation found aborts the run.
///
/// Missing companion files are the one exception to first-failure-wins:
/// that check aggregates every absent path into a single error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LintError {
    /// The primary document itself is absent.
    #[error("{0} not found (run from the skill root)")]
    MissingPrerequisite(String),

    /// One or more required companion files are absent.
    #[error("missing required files: {}", .0.join(", "))]
    MissingCompanionFiles(Vec<String>),

    /// A link target is an absolute path or a Windows drive path.
    #[error("non-relative link in {doc}: {target}")]
    NonRelativeLink { doc: String, target: String },

    /// A link target nests more than one directory level deep.
    #[error("link too deep (keep one level deep): {0}")]
    ExcessiveLinkDepth(String),
}

// ─── Advisories ──────────────────────────────────────────────────

/// A non-fatal style or packaging diagnostic. Advisories are reported
/// but never affect the verdict or exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub message: String,
}

impl Advisory {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ─── Verdict & Report ────────────────────────────────────────────

/// The outcome of a lint run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Verdict {
    /// All checks passed; carries the informational success line.
    Pass { message: String },
    /// A fatal violation was found; remaining checks were skipped.
    Fail { error: LintError },
}

/// The full result of a run: the verdict plus any advisories collected
/// along the way. Advisories are only gathered on runs that reach the
/// style-check phase, so a failed report carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub verdict: Verdict,
    pub advisories: Vec<Advisory>,
}

impl LintReport {
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Pass { .. })
    }
}
