//! Splitting front matter out of markdown documents and decoding it.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;
use tracing::{debug, warn};

use super::error::{FrontMatterError, value_kind};
use super::types::{Document, FrontMatter};

/// Opening fence, lazily captured block, first closing fence, then the body.
/// The optional group lets `---\n---\n` parse as an empty block.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:(.*?)\r?\n)??---\r?\n(.*)\z")
        .expect("front matter pattern is valid")
});

/// Split a markdown document into its raw front matter block and body.
///
/// Front matter is delimited by `---` lines at the very start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// An unterminated block, or a closing fence without a trailing newline, is
/// not an error: the whole input is returned as body.
pub fn split(raw: &str) -> Document {
    if let Some(caps) = FENCED_BLOCK.captures(raw) {
        let block = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());
        debug!(block_len = block.len(), body_len = body.len(), "found front matter block");
        return Document {
            front_matter_raw: Some(block.to_string()),
            body: body.to_string(),
        };
    }

    if raw.starts_with("---\n") || raw.starts_with("---\r\n") {
        warn!("document opens with a fence but has no terminated front matter block; treating it as body");
    }
    Document { front_matter_raw: None, body: raw.to_string() }
}

/// Decode a raw front matter block.
///
/// A missing or blank block yields empty front matter.
pub fn parse(raw: Option<&str>) -> Result<FrontMatter, FrontMatterError> {
    let Some(raw) = raw else {
        return Ok(FrontMatter::default());
    };
    if raw.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    match serde_yaml::from_str(raw).map_err(FrontMatterError::InvalidYaml)? {
        Value::Mapping(fields) => Ok(FrontMatter { fields }),
        Value::Null => Ok(FrontMatter::default()),
        other => Err(FrontMatterError::NotAMapping(value_kind(&other))),
    }
}

impl Document {
    /// Split `raw` and decode its front matter in one go.
    pub fn parse(raw: &str) -> Result<(FrontMatter, Self), FrontMatterError> {
        let doc = split(raw);
        let fm = parse(doc.front_matter_raw.as_deref())?;
        Ok((fm, doc))
    }
}
