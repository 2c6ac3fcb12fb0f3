//! skill-lint
//!
//! Lints a markdown "skill" package: verifies that the required
//! companion files exist next to `SKILL.md` and that the document's
//! links are relative and at most one directory level deep. Style
//! problems are reported as non-fatal advisories.

pub mod config;
pub mod files;
pub mod frontmatter;
pub mod rules;
pub mod runner;
pub mod style;
pub mod types;
