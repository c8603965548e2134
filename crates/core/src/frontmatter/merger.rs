//! Merging generated metadata into the `head` sequence.

use serde_yaml::Value;
use tracing::debug;

use super::error::FrontMatterError;
use super::types::{FrontMatter, HEAD_KEY, HeadEntry, META_TAG};
use crate::generation::MetadataResult;

/// `name` attribute of the description entry.
pub const DESCRIPTION: &str = "description";
/// `name` attribute of the keywords entry.
pub const KEYWORDS: &str = "keywords";

/// How existing `head` entries are treated when new metadata is merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Keep every existing entry and append the new pair.
    #[default]
    Append,
    /// Drop existing `meta` entries named `description` or `keywords` first.
    ReplaceMatching,
}

/// Append the description and keywords entries to `head`.
///
/// `head` is created when absent. Every other key keeps its value and
/// position. The input is left untouched.
pub fn merge(fm: &FrontMatter, result: &MetadataResult) -> Result<FrontMatter, FrontMatterError> {
    merge_with(fm, result, MergePolicy::Append)
}

/// Like [`merge`], with an explicit policy for pre-existing entries.
pub fn merge_with(
    fm: &FrontMatter,
    result: &MetadataResult,
    policy: MergePolicy,
) -> Result<FrontMatter, FrontMatterError> {
    let mut head: Vec<Value> = fm.head()?.map(<[Value]>::to_vec).unwrap_or_default();

    if policy == MergePolicy::ReplaceMatching {
        let before = head.len();
        head.retain(|entry| !is_generated_meta(entry));
        debug!(removed = before - head.len(), "dropped previously generated head entries");
    }

    head.push(HeadEntry::meta(DESCRIPTION, &result.description).to_value());
    head.push(HeadEntry::meta(KEYWORDS, &result.keywords).to_value());

    let mut merged = fm.clone();
    merged.insert(HEAD_KEY, Value::Sequence(head));
    Ok(merged)
}

/// `["meta", {name: description | keywords, ...}]`, whatever the content type.
fn is_generated_meta(entry: &Value) -> bool {
    let Some([tag, attrs]) = entry.as_sequence().map(Vec::as_slice) else {
        return false;
    };
    tag.as_str() == Some(META_TAG)
        && matches!(attrs.get("name").and_then(Value::as_str), Some(DESCRIPTION | KEYWORDS))
}
