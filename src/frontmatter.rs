//! Frontmatter reading
//!
//! Notes may open with a `---`-delimited YAML header. This module extracts
//! that header and exposes it as a key/value mapping. Malformed or oversized
//! YAML is treated as "no frontmatter"; nothing here returns an error.

use serde_yaml::{Mapping, Value};

use crate::constants as C;

/// Extract the raw YAML block between the leading `---` fences
fn frontmatter_block(content: &str) -> Option<&str> {
    if !content.starts_with("---") {
        return None;
    }

    let rest = &content[3..];
    let end = rest.find("\n---")?;
    let block = &rest[..end];

    // Check frontmatter size before parsing
    if block.len() > C::MAX_FRONTMATTER_SIZE {
        return None;
    }

    Some(block)
}

/// Parse the frontmatter header into a mapping
///
/// Returns `None` when the header is absent, malformed, or not a mapping.
pub fn parse(content: &str) -> Option<Mapping> {
    let block = frontmatter_block(content)?;
    match serde_yaml::from_str(block).ok()? {
        Value::Mapping(map) => Some(map),
        _ => None,
    }
}

/// Look up a scalar field and render it as text
///
/// Sequences and nested mappings yield `None`; a date value is expected to
/// be a single scalar.
pub fn field_str(map: &Mapping, key: &str) -> Option<String> {
    match map.get(&Value::String(key.to_string()))? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_date_field() {
        let content = "---\ntitle: Standup\ndate: 2021-06-15\n---\n\n# Standup\n";
        let map = parse(content).unwrap();
        assert_eq!(field_str(&map, "date"), Some("2021-06-15".to_string()));
        assert_eq!(field_str(&map, "title"), Some("Standup".to_string()));
    }

    #[test]
    fn test_parse_without_frontmatter() {
        assert!(parse("# Just a heading\n\nBody text.").is_none());
    }

    #[test]
    fn test_parse_unterminated_header() {
        assert!(parse("---\ndate: 2021-06-15\n\n# Heading\n").is_none());
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let content = "---\ndate: [unclosed\n---\nBody\n";
        assert!(parse(content).is_none());
    }

    #[test]
    fn test_parse_non_mapping_header() {
        let content = "---\n- just\n- a list\n---\nBody\n";
        assert!(parse(content).is_none());
    }

    #[test]
    fn test_parse_oversized_header() {
        let filler = "x".repeat(C::MAX_FRONTMATTER_SIZE + 1);
        let content = format!("---\ncomment: {}\n---\nBody\n", filler);
        assert!(parse(&content).is_none());
    }

    #[test]
    fn test_field_str_non_scalar() {
        let content = "---\ndate:\n  year: 2021\ntags: [a, b]\n---\n";
        let map = parse(content).unwrap();
        assert_eq!(field_str(&map, "date"), None);
        assert_eq!(field_str(&map, "tags"), None);
        assert_eq!(field_str(&map, "missing"), None);
    }

    #[test]
    fn test_field_str_stringifies_scalars() {
        let content = "---\ncount: 42\ndraft: true\n---\n";
        let map = parse(content).unwrap();
        assert_eq!(field_str(&map, "count"), Some("42".to_string()));
        assert_eq!(field_str(&map, "draft"), Some("true".to_string()));
    }
}
