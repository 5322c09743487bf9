//! Canonical manifest serialization and hashing.
//!
//! The serialized form is what browsers fetch, so it has to be deterministic:
//! identical entry lists must yield byte-identical text, which in turn keeps
//! the content hash - and therefore the cache-busting filename - stable
//! across repeated builds of unchanged output.

use super::ManifestEntry;
use crate::utils::hash;

/// Serialize entries into the manifest script.
///
/// The manifest is itself a script so it can be pulled in with
/// `importScripts`; it appends onto any manifest loaded before it.
pub fn serialize_entries(entries: &[ManifestEntry]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(entries)?;
    Ok(format!(
        "self.__precacheManifest = (self.__precacheManifest || []).concat({json});\n"
    ))
}

/// Content hash of the serialized manifest text.
pub fn manifest_hash(text: &str) -> String {
    hash::revision(text)
}
