//! Lint Runner
//!
//! Drives the linear check sequence over a skill root: required files,
//! link extraction and validation, then advisory style checks. Any
//! fatal finding stops the run; advisories never do.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::LintConfig;
use crate::files::{check_required_files, ExistenceProbe, FsProbe};
use crate::rules::RuleSet;
use crate::style::{frontmatter_advisories, soft_style_check};
use crate::types::{LintError, LintReport, Verdict};

/// Run every check over an already-read document.
///
/// Phase order is fixed: required files first, then link validation,
/// then the advisory style checks. A fatal finding in an earlier phase
/// skips everything after it, so a failed report carries no advisories.
pub fn lint_document(
    config: &LintConfig,
    rules: &RuleSet,
    document: &str,
    probe: &dyn ExistenceProbe,
) -> LintReport {
    let missing = check_required_files(&config.required_files, probe);
    if !missing.is_empty() {
        return fail(LintError::MissingCompanionFiles(missing));
    }
    info!("required files present");

    let links = rules.extract_links(document);
    info!(count = links.len(), "links extracted");

    if let Err(error) = rules.validate(&links) {
        return fail(error);
    }

    let mut advisories = frontmatter_advisories(config, document);
    if let Some(advisory) = soft_style_check(config, document) {
        advisories.push(advisory);
    }

    LintReport {
        verdict: Verdict::Pass {
            message: config.success_message(),
        },
        advisories,
    }
}

/// Run the full lint against a skill root on disk.
///
/// The primary document is read once; its absence is a fatal verdict
/// (not an I/O error) so the caller gets the standard diagnostic. Read
/// failures on a present file are genuine errors and propagate.
pub fn run(root: &Path, config: &LintConfig) -> Result<LintReport> {
    let doc_path = root.join(&config.doc_name);
    if !doc_path.exists() {
        return Ok(fail(LintError::MissingPrerequisite(config.doc_name.clone())));
    }

    let document = fs::read_to_string(&doc_path)
        .with_context(|| format!("Failed to read {}", doc_path.display()))?;

    let rules = RuleSet::new(config)?;
    let probe = FsProbe::new(root);

    Ok(lint_document(config, &rules, &document, &probe))
}

fn fail(error: LintError) -> LintReport {
    LintReport {
        verdict: Verdict::Fail { error },
        advisories: Vec::new(),
    }
}
