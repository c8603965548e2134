//! Front matter serialization back to markdown.

use super::error::FrontMatterError;
use super::types::FrontMatter;

/// Fence line opening and closing the front matter block.
pub const FENCE: &str = "---";

/// Render front matter and body as a fenced markdown document.
///
/// Keys are emitted in insertion order. The body is appended verbatim.
pub fn serialize(fm: &FrontMatter, body: &str) -> Result<String, FrontMatterError> {
    let yaml = frontmatter_to_yaml(fm)?;

    let mut out = String::with_capacity(yaml.len() + body.len() + 2 * (FENCE.len() + 1));
    out.push_str(FENCE);
    out.push('\n');
    out.push_str(&yaml);
    if !yaml.is_empty() && !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(FENCE);
    out.push('\n');
    out.push_str(body);
    Ok(out)
}

/// Serialize front matter to YAML (without fences). Empty maps render as "".
pub fn frontmatter_to_yaml(fm: &FrontMatter) -> Result<String, FrontMatterError> {
    if fm.is_empty() {
        return Ok(String::new());
    }
    serde_yaml::to_string(&fm.fields).map_err(FrontMatterError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parser::{parse, split};
    use serde_yaml::Value;

    #[test]
    fn serialize_document_with_frontmatter() {
        let mut fm = FrontMatter::new();
        fm.insert("title", Value::String("Test".to_string()));

        let result = serialize(&fm, "# Content").unwrap();
        assert_eq!(result, "---\ntitle: Test\n---\n# Content");
    }

    #[test]
    fn serialize_empty_frontmatter_as_empty_block() {
        let result = serialize(&FrontMatter::new(), "Body\n").unwrap();
        assert_eq!(result, "---\n---\nBody\n");
        let doc = split(&result);
        assert!(parse(doc.front_matter_raw.as_deref()).unwrap().is_empty());
        assert_eq!(doc.body, "Body\n");
    }

    #[test]
    fn serialize_keeps_insertion_order() {
        let fm = parse(Some("zeta: 1\nalpha: 2\nmid: 3")).unwrap();
        let yaml = frontmatter_to_yaml(&fm).unwrap();
        assert_eq!(yaml, "zeta: 1\nalpha: 2\nmid: 3\n");
    }

    #[test]
    fn roundtrip_frontmatter() {
        let original = "---\ntitle: Hello\ncount: 42\nnext:\n  text: Next\n  link: /next\n---\n\n# Body";
        let doc = split(original);
        let fm = parse(doc.front_matter_raw.as_deref()).unwrap();
        let serialized = serialize(&fm, &doc.body).unwrap();

        let reparsed = split(&serialized);
        assert_eq!(parse(reparsed.front_matter_raw.as_deref()).unwrap(), fm);
        assert_eq!(reparsed.body, "\n# Body");
    }

    #[test]
    fn body_is_not_escaped() {
        let body = "---\nnot: front matter\n---\n";
        let result = serialize(&FrontMatter::new(), body).unwrap();
        assert_eq!(split(&result).body, body);
    }
}
