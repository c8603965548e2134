//! Idempotency check run before any metadata is generated.

use tracing::debug;

use super::types::{FrontMatter, HEAD_KEY};

/// Decide whether a document should be processed.
///
/// Only the presence of the `head` key matters, not its contents: any
/// document that already carries `head` is skipped unless the caller asks
/// to override it.
pub fn should_proceed(fm: &FrontMatter, override_existing: bool) -> bool {
    let has_head = fm.contains_key(HEAD_KEY);
    debug!(has_head, override_existing, "idempotency check");
    !has_head || override_existing
}
