//! Companion File Checks
//!
//! Verifies that the skill package's required companion files exist.
//! The filesystem is reached through an injected probe so the check
//! itself stays pure and testable.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Answers "does this relative path exist in the skill root?".
pub trait ExistenceProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Filesystem-backed probe rooted at the skill directory.
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ExistenceProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }
}

/// Return every required path the probe reports as absent, in the
/// order the paths were declared.
///
/// Unlike link validation this check aggregates: all missing files are
/// collected into one result rather than stopping at the first.
pub fn check_required_files(required: &[String], probe: &dyn ExistenceProbe) -> Vec<String> {
    let mut missing = Vec::new();

    for path in required {
        if probe.exists(Path::new(path)) {
            debug!(path = %path, "required file present");
        } else {
            missing.push(path.clone());
        }
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    /// Set-backed probe for tests.
    struct SetProbe(HashSet<&'static str>);

    impl ExistenceProbe for SetProbe {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path.to_str().unwrap_or(""))
        }
    }

    fn required() -> Vec<String> {
        vec![
            "context-clarifier.md".to_string(),
            "references/REFERENCE.md".to_string(),
            "references/red-flags.md".to_string(),
        ]
    }

    #[test]
    fn test_all_present() {
        let probe = SetProbe(HashSet::from([
            "context-clarifier.md",
            "references/REFERENCE.md",
            "references/red-flags.md",
        ]));
        assert!(check_required_files(&required(), &probe).is_empty());
    }

    #[test]
    fn test_missing_files_aggregate_in_declared_order() {
        let probe = SetProbe(HashSet::from(["references/REFERENCE.md"]));
        let missing = check_required_files(&required(), &probe);
        assert_eq!(
            missing,
            vec!["context-clarifier.md", "references/red-flags.md"]
        );
    }

    #[test]
    fn test_fs_probe_checks_under_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("context-clarifier.md"), "x").unwrap();

        let probe = FsProbe::new(dir.path());
        assert!(probe.exists(Path::new("context-clarifier.md")));
        assert!(!probe.exists(Path::new("references/REFERENCE.md")));
    }
}
