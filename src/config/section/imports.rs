//! `[imports]` section configuration.
//!
//! Where the generated worker gets its runtime support library from, plus
//! any extra scripts it should import before running.
//!
//! # Example
//!
//! ```toml
//! [imports]
//! workbox_from = "cdn"      # "cdn" | "local" | "disabled" | a bundle name
//! scripts = ["push-listener.js"]
//! directory = "wb-assets"   # Subdirectory for emitted pipeline artifacts
//! ```
//!
//! `scripts` also accepts a single string; it is normalized to a list.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// WorkboxSource
// ============================================================================

/// Where the runtime support import resolves from.
///
/// Serialized as a plain string: the three keywords are reserved, anything
/// else names a bundle produced by the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkboxSource {
    /// No runtime import; the generated script brings its own support code.
    Disabled,
    /// One fixed external CDN URL.
    Cdn,
    /// A copy of the bundled runtime script, emitted into the build output.
    Local,
    /// A named bundle already produced by the build.
    Bundle(String),
}

impl WorkboxSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Disabled => "disabled",
            Self::Cdn => "cdn",
            Self::Local => "local",
            Self::Bundle(name) => name,
        }
    }
}

impl From<&str> for WorkboxSource {
    fn from(value: &str) -> Self {
        match value {
            "disabled" => Self::Disabled,
            "cdn" => Self::Cdn,
            "local" => Self::Local,
            name => Self::Bundle(name.to_string()),
        }
    }
}

impl fmt::Display for WorkboxSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WorkboxSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkboxSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(de::Error::custom(
                "expected \"cdn\", \"local\", \"disabled\", or a bundle name",
            ));
        }
        Ok(Self::from(value.as_str()))
    }
}

// ============================================================================
// ImportsConfig
// ============================================================================

/// Runtime-import settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportsConfig {
    /// Runtime support source. Exactly one resolution mode is active per
    /// run.
    pub workbox_from: WorkboxSource,

    /// Extra script URLs the worker imports, in declared order. Used
    /// verbatim; no public-path joining.
    #[serde(deserialize_with = "one_or_many")]
    pub scripts: Vec<String>,

    /// Subdirectory (relative to the output root) for artifacts this
    /// pipeline emits: the manifest and, in local mode, the runtime copy.
    pub directory: String,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            workbox_from: WorkboxSource::Cdn,
            scripts: Vec::new(),
            directory: String::new(),
        }
    }
}

/// Accept either a single string or a list of strings.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(url) => vec![url],
        OneOrMany::Many(urls) => urls,
    })
}
