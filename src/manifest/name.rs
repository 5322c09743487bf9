//! Manifest artifact naming.
//!
//! Substitutes the computed content hash into the configured filename
//! template. A template without the placeholder would emit the same filename
//! for every build and defeat cache busting entirely, so that is a hard
//! configuration error rather than something to paper over.

use crate::pipeline::EmitError;

/// Hash placeholder token required in `manifest.filename`.
pub const HASH_PLACEHOLDER: &str = "[manifestHash]";

/// Substitute the manifest hash into the filename template.
pub fn substitute_hash(template: &str, hash: &str) -> Result<String, EmitError> {
    if !template.contains(HASH_PLACEHOLDER) {
        return Err(EmitError::MissingHashPlaceholder(template.to_string()));
    }
    Ok(template.replace(HASH_PLACEHOLDER, hash))
}
