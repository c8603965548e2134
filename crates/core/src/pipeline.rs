//! Split → guard → generate → merge → serialize, for one document.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::types::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, GenerationConfig};
use crate::frontmatter::{
    FrontMatterError, MergePolicy, merge_with, parse, serialize, should_proceed, split,
};
use crate::generation::{GenerationError, MetadataGenerator, MetadataResult};

/// Per-run settings. Read-only for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub model: String,
    pub temperature: f64,
    /// Process documents that already carry `head`, replacing the
    /// previously generated description and keywords entries.
    pub override_existing: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            override_existing: false,
        }
    }
}

impl RunOptions {
    pub fn from_config(cfg: &GenerationConfig) -> Self {
        Self { model: cfg.model.clone(), temperature: cfg.temperature, override_existing: false }
    }
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The re-serialized document with the new head entries.
    Updated { document: String, metadata: MetadataResult },
    /// `head` already exists and override was not requested. Nothing changed.
    AlreadyProcessed,
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Run the full transform on a raw document.
///
/// The generator is called at most once, and only after the front matter
/// decoded cleanly and the idempotency check passed.
pub fn process(
    raw: &str,
    generator: &dyn MetadataGenerator,
    options: &RunOptions,
) -> Result<Outcome, TransformError> {
    let doc = split(raw);
    let fm = parse(doc.front_matter_raw.as_deref())?;

    if !should_proceed(&fm, options.override_existing) {
        return Ok(Outcome::AlreadyProcessed);
    }
    // fail on a malformed head before spending a generation call
    fm.head()?;

    let metadata = generator.generate(&doc.body, &options.model, options.temperature)?;
    debug!(
        description_len = metadata.description.len(),
        keywords = %metadata.keywords,
        "metadata generated"
    );

    let policy = if options.override_existing {
        MergePolicy::ReplaceMatching
    } else {
        MergePolicy::Append
    };
    let merged = merge_with(&fm, &metadata, policy)?;
    let document = serialize(&merged, &doc.body)?;
    info!(?policy, "head metadata merged");

    Ok(Outcome::Updated { document, metadata })
}
