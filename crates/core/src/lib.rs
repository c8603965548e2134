//! Core library for mdmeta: writes generated description and keywords
//! `meta` entries into the `head` list of markdown front matter.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod frontmatter;
pub mod generation;
pub mod pipeline;

pub use pipeline::{Outcome, RunOptions, TransformError, process};
