//! Precache manifest derivation, serialization, and naming.
//!
//! | Module      | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `build`     | Derive entries from the build output set         |
//! | `serialize` | Canonical manifest text + content hash           |
//! | `name`      | Cache-busting filename from template + hash      |

pub mod build;
pub mod name;
pub mod serialize;

pub use build::{ManifestOutcome, build_entries};
pub use name::{HASH_PLACEHOLDER, substitute_hash};
pub use serialize::{manifest_hash, serialize_entries};

use serde::{Deserialize, Serialize};

/// One precache record.
///
/// `revision` is `None` when the URL itself is already content-hashed by
/// the build; it serializes as an explicit `null` so consumers can tell
/// "no revision needed" from a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    pub revision: Option<String>,
}

impl ManifestEntry {
    pub fn new(url: impl Into<String>, revision: Option<String>) -> Self {
        Self {
            url: url.into(),
            revision,
        }
    }
}
