//! Style Checks
//!
//! Best-effort advisory checks over the raw document text. Nothing in
//! this module affects the verdict; every finding is reported as a
//! [`Advisory`] and the run continues.

use tracing::debug;

use crate::config::LintConfig;
use crate::frontmatter::parse_frontmatter;
use crate::types::Advisory;

/// Scan the document's lines for the discouraged phrase co-occurring
/// with the reference-name token, stopping at the first match.
///
/// This is substring co-occurrence on raw line text, not structured
/// parsing. It catches the common wording mistake of calling the
/// companion reference a "sub-skill".
pub fn soft_style_check(config: &LintConfig, document: &str) -> Option<Advisory> {
    for line in document.lines() {
        if line.contains(&config.reference_token) && line.contains(&config.discouraged_phrase) {
            debug!(line = %line, "discouraged phrase found");
            return Some(Advisory::new(format!(
                "{} calls {} a sub-skill; prefer '{}'.",
                config.doc_name, config.reference_token, config.preferred_phrase
            )));
        }
    }

    None
}

/// Advisory checks over the document's YAML frontmatter.
///
/// A skill document is expected to open with a frontmatter block that
/// names and describes the skill. Absence is a packaging smell, not an
/// error, so findings stay advisory.
pub fn frontmatter_advisories(config: &LintConfig, document: &str) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    match parse_frontmatter(document) {
        None => {
            advisories.push(Advisory::new(format!(
                "{} has no YAML frontmatter block.",
                config.doc_name
            )));
        }
        Some(fm) => {
            if fm.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
                advisories.push(Advisory::new(format!(
                    "{} frontmatter is missing 'name'.",
                    config.doc_name
                )));
            }
            if fm
                .description
                .as_deref()
                .map_or(true, |d| d.trim().is_empty())
            {
                advisories.push(Advisory::new(format!(
                    "{} frontmatter is missing 'description'.",
                    config.doc_name
                )));
            }
        }
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_co_occurrence_triggers_advisory() {
        let config = LintConfig::default();
        let doc = "intro\n参见 context-clarifier（必需子技能）\nmore";
        let advisory = soft_style_check(&config, doc).unwrap();
        assert_eq!(
            advisory.message,
            "SKILL.md calls context-clarifier a sub-skill; prefer '必需参考'."
        );
    }

    #[test]
    fn test_tokens_on_separate_lines_do_not_trigger() {
        let config = LintConfig::default();
        let doc = "context-clarifier is linked here\n必需子技能 mentioned elsewhere";
        assert!(soft_style_check(&config, doc).is_none());
    }

    #[test]
    fn test_only_first_match_reported() {
        let config = LintConfig::default();
        let doc = "context-clarifier 必需子技能\ncontext-clarifier 必需子技能";
        assert!(soft_style_check(&config, doc).is_some());
        // One advisory regardless of how many lines match.
    }

    #[test]
    fn test_frontmatter_complete_yields_no_advisories() {
        let config = LintConfig::default();
        let doc = "---\nname: x\ndescription: y\n---\nBody [ref](notes.md)";
        assert!(frontmatter_advisories(&config, doc).is_empty());
    }

    #[test]
    fn test_frontmatter_missing_block() {
        let config = LintConfig::default();
        let advisories = frontmatter_advisories(&config, "no block at all");
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].message, "SKILL.md has no YAML frontmatter block.");
    }

    #[test]
    fn test_frontmatter_missing_fields() {
        let config = LintConfig::default();
        let advisories = frontmatter_advisories(&config, "---\nname: x\n---\nBody");
        assert_eq!(advisories.len(), 1);
        assert_eq!(
            advisories[0].message,
            "SKILL.md frontmatter is missing 'description'."
        );
    }
}