//! Link Rules
//!
//! Extracts markdown links from the primary document and validates that
//! each target is relative and at most one directory level deep.
//! Validation walks the links in document order and stops at the first
//! violation, so diagnostics are deterministic.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::LintConfig;
use crate::types::LintError;

/// Matches standard markdown links: `[text](target)`. The display text
/// may not contain `]` and the target may not contain `)`.
const LINK_PATTERN: &str = r"\[[^\]]+\]\(([^)]+)\)";

/// Matches a Windows drive prefix written with an escaped backslash,
/// e.g. `C:\\`. A single backslash after the drive letter is not
/// matched.
const DRIVE_PREFIX_PATTERN: &str = r"^[A-Za-z]:\\\\";

/// Compiled link rules for one document.
///
/// Construction compiles both patterns once; extraction and validation
/// are then infallible and pure respectively.
pub struct RuleSet {
    doc_name: String,
    link_pattern: Regex,
    drive_prefix: Regex,
}

impl RuleSet {
    pub fn new(config: &LintConfig) -> Result<Self> {
        Ok(Self {
            doc_name: config.doc_name.clone(),
            link_pattern: Regex::new(LINK_PATTERN)
                .context("Failed to compile markdown link pattern")?,
            drive_prefix: Regex::new(DRIVE_PREFIX_PATTERN)
                .context("Failed to compile drive prefix pattern")?,
        })
    }

    /// Extract every markdown link target from `document`, in document
    /// order, with surrounding whitespace trimmed. Never fails; a
    /// document without links yields an empty vector.
    pub fn extract_links(&self, document: &str) -> Vec<String> {
        self.link_pattern
            .captures_iter(document)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }

    /// Validate extracted link targets in order, short-circuiting at
    /// the first violation.
    ///
    /// Web URLs, in-page anchors, and `mailto:` targets are exempt from
    /// every rule. Non-exempt targets must be relative paths at most
    /// one directory level below the document.
    pub fn validate(&self, links: &[String]) -> Result<(), LintError> {
        for target in links {
            if self.is_exempt(target) {
                debug!(link = %target, "link exempt from path rules");
                continue;
            }

            if target.starts_with('/') || self.drive_prefix.is_match(target) {
                return Err(LintError::NonRelativeLink {
                    doc: self.doc_name.clone(),
                    target: target.clone(),
                });
            }

            if self.depth(target) > 2 {
                return Err(LintError::ExcessiveLinkDepth(target.clone()));
            }

            debug!(link = %target, "link ok");
        }

        Ok(())
    }

    /// Web URLs, anchors, and mailto links are skipped entirely.
    fn is_exempt(&self, target: &str) -> bool {
        target.contains("://") || target.starts_with('#') || target.starts_with("mailto:")
    }

    /// Path depth: segments after splitting on `/`, ignoring empty
    /// segments and `.`. `notes.md` is 1, `dir/notes.md` is 2.
    fn depth(&self, target: &str) -> usize {
        target
            .split('/')
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .count()
    }
}
