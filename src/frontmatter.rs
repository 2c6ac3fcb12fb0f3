//! Frontmatter Parser
//!
//! Skill documents open with a YAML frontmatter block carrying the
//! skill's metadata:
//!
//! ```text
//! ---
//! name: my-skill
//! description: Does something useful
//! ---
//!
//! Instructions follow in Markdown...
//! ```
//!
//! Only the fields the linter inspects are modeled; unknown keys are
//! ignored.

use serde::Deserialize;

/// Deserialized YAML frontmatter from a skill document.
#[derive(Debug, Clone, Deserialize)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Extract and parse the frontmatter block from raw Markdown content.
///
/// The block must open at the top of the document and be delimited by
/// `---` lines. Returns `None` if the block is missing or unparseable.
pub fn parse_frontmatter(raw: &str) -> Option<Frontmatter> {
    let trimmed = raw.trim_start();

    if !trimmed.starts_with("---") {
        return None;
    }

    let after_open = &trimmed[3..];
    let close_idx = after_open.find("\n---")?;
    let yaml_block = after_open[..close_idx].trim();

    // The frontmatter is flat scalar key-value pairs, so a lightweight
    // YAML-to-JSON conversion is enough; no YAML crate needed.
    let json_value = yaml_to_json(yaml_block)?;
    serde_json::from_value::<Frontmatter>(json_value).ok()
}

/// Minimal YAML-to-JSON converter for flat frontmatter.
///
/// Supports scalar values, booleans, integers, and inline `[a, b]`
/// arrays. Comment lines and blank lines are skipped.
fn yaml_to_json(yaml: &str) -> Option<serde_json::Value> {
    use serde_json::{Map, Value};

    let mut map = Map::new();

    for line in yaml.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let colon = line.find(':')?;
        let key = line[..colon].trim().to_string();
        let raw_value = line[colon + 1..].trim();

        let value = if raw_value.is_empty() {
            Value::Null
        } else if raw_value.starts_with('[') && raw_value.ends_with(']') {
            let inner = &raw_value[1..raw_value.len() - 1];
            let items: Vec<Value> = inner
                .split(',')
                .map(|s| Value::String(s.trim().to_string()))
                .collect();
            Value::Array(items)
        } else if raw_value == "true" {
            Value::Bool(true)
        } else if raw_value == "false" {
            Value::Bool(false)
        } else if let Ok(n) = raw_value.parse::<i64>() {
            Value::Number(n.into())
        } else {
            Value::String(raw_value.to_string())
        };

        map.insert(key, value);
    }

    Some(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter_basic() {
        let raw = "---\nname: problem-solution-dialogue\ndescription: A dialogue skill\n---\n\nBody";
        let fm = parse_frontmatter(raw).unwrap();
        assert_eq!(fm.name.unwrap(), "problem-solution-dialogue");
        assert_eq!(fm.description.unwrap(), "A dialogue skill");
    }

    #[test]
    fn test_parse_frontmatter_missing_fields() {
        let raw = "---\nname: only-a-name\n---\n\nBody";
        let fm = parse_frontmatter(raw).unwrap();
        assert_eq!(fm.name.unwrap(), "only-a-name");
        assert!(fm.description.is_none());
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(parse_frontmatter("Just markdown, no block.").is_none());
    }

    #[test]
    fn test_unclosed_frontmatter() {
        assert!(parse_frontmatter("---\nname: dangling\n").is_none());
    }

    #[test]
    fn test_comments_and_unknown_keys_are_tolerated() {
        let raw = "---\n# packaging metadata\nname: x\nextra: [a, b]\ncount: 3\n---\nBody";
        let fm = parse_frontmatter(raw).unwrap();
        assert_eq!(fm.name.unwrap(), "x");
    }
}
