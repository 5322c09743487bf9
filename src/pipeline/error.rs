//! Emission error types.
//!
//! Everything here is fatal for the current pass: each variant describes a
//! condition under which the generated worker's guarantees (every manifest
//! entry fetchable at a unique URL, every import resolvable) would no longer
//! hold. Degraded inputs never land here - they become build warnings.

use thiserror::Error;

use crate::manifest::HASH_PLACEHOLDER;

/// Fatal emission failures.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("manifest filename template `{0}` is missing the {HASH_PLACEHOLDER} placeholder")]
    MissingHashPlaceholder(String),

    #[error("no bundle named `{0}` was produced by this build")]
    BundleNotFound(String),

    #[error("bundle `{0}` produced no script files")]
    EmptyBundle(String),

    #[error("manifest entries collide on url `{0}`")]
    DuplicateUrl(String),

    #[error("invalid pattern in `{field}`")]
    Pattern {
        field: &'static str,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("manifest serialization failed")]
    Serialize(#[from] serde_json::Error),

    #[error("script generation failed")]
    Generate(#[source] anyhow::Error),
}
