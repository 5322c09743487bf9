//! `[build]` section configuration.
//!
//! Points the CLI at a finished build and controls how asset names are
//! turned into URLs.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"          # Directory holding the finished build
//! public_path = "/static/" # Prefix for every URL embedded in the worker
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Build input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory containing the finished build output (relative to the
    /// config file, or absolute).
    pub output: PathBuf,

    /// Public URL prefix for all asset references.
    /// - `""` (default): relative URLs
    /// - `"/"`: root-relative URLs
    /// - full URL: CDN deployments
    pub public_path: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            public_path: String::new(),
        }
    }
}

impl BuildConfig {
    /// Validate this section, collecting findings into `diag`.
    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        // A public path with a scheme must be a parseable URL; everything
        // else (relative or root-relative prefixes) goes through as-is.
        if self.public_path.contains("://")
            && let Err(err) = url::Url::parse(&self.public_path)
        {
            diag.error_with_hint(
                FieldPath::new("build.public_path"),
                format!("invalid URL `{}`: {err}", self.public_path),
                "use a relative prefix, or a full URL like https://cdn.example.com/app/",
            );
        }
    }
}
