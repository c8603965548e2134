//! Front matter splitting, inspection, merging, and serialization.
//!
//! This module provides functionality to:
//! - Split a fenced YAML block from the top of a markdown document
//! - Decide whether head metadata was already installed
//! - Append generated `meta` entries to `head`
//! - Serialize documents back to markdown with front matter

pub mod error;
pub mod guard;
pub mod merger;
pub mod parser;
pub mod serializer;
pub mod types;

pub use error::FrontMatterError;
pub use guard::should_proceed;
pub use merger::{MergePolicy, merge, merge_with};
pub use parser::{parse, split};
pub use serializer::{FENCE, frontmatter_to_yaml, serialize};
pub use types::{AttributeSet, Document, FrontMatter, HEAD_KEY, HeadEntry, META_TAG};
