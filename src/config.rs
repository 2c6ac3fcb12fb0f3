//! Lint Configuration
//!
//! The fixed inputs of a lint run: the primary document name, the
//! companion files that must exist next to it, and the token pair that
//! drives the soft style check. These are data rather than hard-coded
//! logic so the checks stay testable in isolation and the localized
//! phrases can change without touching the rules.

/// Configuration for one lint run over a skill root.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// File name of the primary document, relative to the skill root.
    pub doc_name: String,
    /// Companion files that must exist, relative to the skill root.
    /// Order is preserved in the missing-files diagnostic.
    pub required_files: Vec<String>,
    /// Reference name the style check looks for on a line.
    pub reference_token: String,
    /// Localized phrase ("required sub-skill") that is discouraged when
    /// it shares a line with the reference token.
    pub discouraged_phrase: String,
    /// Localized phrase ("required reference") recommended instead.
    pub preferred_phrase: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            doc_name: "SKILL.md".to_string(),
            required_files: vec![
                "context-clarifier.md".to_string(),
                "references/REFERENCE.md".to_string(),
                "references/red-flags.md".to_string(),
            ],
            reference_token: "context-clarifier".to_string(),
            discouraged_phrase: "必需子技能".to_string(),
            preferred_phrase: "必需参考".to_string(),
        }
    }
}

impl LintConfig {
    /// The informational line printed when every check passes.
    pub fn success_message(&self) -> String {
        format!(
            "OK: required files present; {} links are relative and one-level deep.",
            self.doc_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_required_files_order() {
        let config = LintConfig::default();
        assert_eq!(
            config.required_files,
            vec![
                "context-clarifier.md",
                "references/REFERENCE.md",
                "references/red-flags.md",
            ]
        );
    }

    #[test]
    fn test_success_message_names_the_doc() {
        let config = LintConfig::default();
        assert_eq!(
            config.success_message(),
            "OK: required files present; SKILL.md links are relative and one-level deep."
        );
    }
}
