//! Front matter types and data structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::error::{FrontMatterError, value_kind};

/// Key holding the head metadata sequence.
pub const HEAD_KEY: &str = "head";

/// Tag used for every entry this tool writes into `head`.
pub const META_TAG: &str = "meta";

/// Attributes of a head entry, in insertion order.
pub type AttributeSet = IndexMap<String, String>;

/// Result of splitting front matter from markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw text between the fences (if a block was found).
    pub front_matter_raw: Option<String>,
    /// The markdown body (everything after the closing fence).
    pub body: String,
}

/// Parsed YAML front matter, keys kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    pub fields: Mapping,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Insert or replace a field. Replacing keeps the key's position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(Value::String(key.into()), value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw view of the `head` sequence.
    ///
    /// Returns `Ok(None)` when the key is absent. A bare `head:` (null) reads
    /// as an empty sequence. Anything other than a sequence is malformed.
    pub fn head(&self) -> Result<Option<&[Value]>, FrontMatterError> {
        match self.fields.get(HEAD_KEY) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(&[])),
            Some(Value::Sequence(seq)) => Ok(Some(seq.as_slice())),
            Some(other) => Err(FrontMatterError::MalformedHead(value_kind(other))),
        }
    }

    /// Typed view of `head`.
    ///
    /// Entries that are not `[tag, {string: string}]` pairs (e.g. a
    /// `["script", {}, "code"]` triple) are skipped here, but are still kept
    /// in `fields` and survive a merge untouched.
    pub fn head_entries(&self) -> Result<Vec<HeadEntry>, FrontMatterError> {
        Ok(self
            .head()?
            .unwrap_or_default()
            .iter()
            .filter_map(HeadEntry::from_value)
            .collect())
    }
}

impl From<Mapping> for FrontMatter {
    fn from(fields: Mapping) -> Self {
        Self { fields }
    }
}

/// One `[tag, attributes]` element of the `head` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadEntry {
    pub tag: String,
    pub attributes: AttributeSet,
}

impl HeadEntry {
    /// A `meta` entry with `name` and `content` attributes.
    pub fn meta(name: &str, content: &str) -> Self {
        let mut attributes = AttributeSet::new();
        attributes.insert("name".to_string(), name.to_string());
        attributes.insert("content".to_string(), content.to_string());
        Self { tag: META_TAG.to_string(), attributes }
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").map(String::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.attributes.get("content").map(String::as_str)
    }

    /// Decode a `[tag, {key: value}]` pair. Returns `None` for any other shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        let [tag, attrs] = value.as_sequence()?.as_slice() else {
            return None;
        };
        let mut attributes = AttributeSet::new();
        for (k, v) in attrs.as_mapping()? {
            attributes.insert(k.as_str()?.to_string(), v.as_str()?.to_string());
        }
        Some(Self { tag: tag.as_str()?.to_string(), attributes })
    }

    /// Encode as the two element sequence used in front matter.
    pub fn to_value(&self) -> Value {
        let attrs: Mapping = self
            .attributes
            .iter()
            .map(|(k, v)| (Value::String(k.clone()), Value::String(v.clone())))
            .collect();
        Value::Sequence(vec![Value::String(self.tag.clone()), Value::Mapping(attrs)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(yaml: &str) -> FrontMatter {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn head_absent() {
        let fm = fm("title: Hello");
        assert!(fm.head().unwrap().is_none());
        assert!(fm.head_entries().unwrap().is_empty());
    }

    #[test]
    fn bare_head_reads_as_empty() {
        let fm = fm("head:");
        assert_eq!(fm.head().unwrap(), Some(&[][..]));
    }

    #[test]
    fn head_scalar_is_malformed() {
        let fm = fm("head: nope");
        let err = fm.head().unwrap_err();
        assert!(matches!(err, FrontMatterError::MalformedHead("a string")));
        assert!(fm.head_entries().is_err());
    }

    #[test]
    fn head_entries_skip_foreign_shapes() {
        let fm = fm(r#"
head:
  - - meta
    - name: description
      content: hello
  - - script
    - {}
    - console.log(1)
  - - link
    - rel: icon
      href: /favicon.ico
"#);
        let entries = fm.head_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag, "meta");
        assert_eq!(entries[0].name(), Some("description"));
        assert_eq!(entries[0].content(), Some("hello"));
        assert_eq!(entries[1].tag, "link");
        assert_eq!(entries[1].attributes.get("href").map(String::as_str), Some("/favicon.ico"));
    }

    #[test]
    fn meta_entry_value_shape() {
        let value = HeadEntry::meta("keywords", "rust, yaml").to_value();
        let seq = value.as_sequence().unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].as_str(), Some("meta"));
        assert_eq!(seq[1].get("name").and_then(Value::as_str), Some("keywords"));
        assert_eq!(seq[1].get("content").and_then(Value::as_str), Some("rust, yaml"));
        assert_eq!(HeadEntry::from_value(&value), Some(HeadEntry::meta("keywords", "rust, yaml")));
    }

    #[test]
    fn insert_existing_key_keeps_position() {
        let mut fm = fm("a: 1\nb: 2\nc: 3");
        fm.insert("b", Value::from(20));
        let keys: Vec<_> = fm.fields.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(fm.get("b").and_then(Value::as_i64), Some(20));
    }
}
