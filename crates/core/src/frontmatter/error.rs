//! Errors raised while decoding, merging, or re-emitting front matter.

use serde_yaml::Value;
use thiserror::Error;

/// A front matter block that exists but cannot be used.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML front matter: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    #[error("front matter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("'head' must be a sequence, found {0}")]
    MalformedHead(&'static str),

    #[error("failed to serialize front matter: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Human readable name of a YAML value's kind, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
