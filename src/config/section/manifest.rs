//! `[manifest]` section configuration.
//!
//! Controls which build outputs become precache entries and how the manifest
//! artifact is named.
//!
//! # Example
//!
//! ```toml
//! [manifest]
//! filename = "precache-manifest.[manifestHash].js"
//! exclude = ['\.map$', '(^|/)stats\.json$']
//! dont_cache_bust_urls_matching = '\.[0-9a-f]{8}\.'
//! max_file_size_to_cache_in_bytes = 2097152
//!
//! [manifest.modify_url_prefix]
//! "static/" = "cdn/"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Default exclusion patterns: source maps and this pipeline's own artifacts
/// from a previous pass.
fn default_exclude() -> Vec<String> {
    vec![
        r"\.map$".to_string(),
        r"(^|/)precache-manifest\.".to_string(),
        r"(^|/)workbox-sw\.".to_string(),
    ]
}

fn default_filename() -> String {
    "precache-manifest.[manifestHash].js".to_string()
}

const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Precache manifest settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Filename template for the manifest artifact. Must contain the
    /// `[manifestHash]` placeholder; the computed content hash is
    /// substituted at emission time.
    pub filename: String,

    /// Regexes over asset names; a match keeps the asset even when nothing
    /// else would. Empty means "everything not excluded".
    pub include: Vec<String>,

    /// Regexes over asset names; a match drops the asset from the manifest.
    pub exclude: Vec<String>,

    /// URLs matching this regex are treated as already content-hashed by
    /// the build and get a null revision.
    pub dont_cache_bust_urls_matching: Option<String>,

    /// URL prefix rewrites applied to each entry before the manifest is
    /// sealed. Longest matching prefix wins.
    pub modify_url_prefix: BTreeMap<String, String>,

    /// Assets larger than this are excluded with a build warning.
    pub max_file_size_to_cache_in_bytes: u64,

    /// Extra patterns forwarded verbatim to the script generator. The
    /// pipeline itself never globs; unset means an explicit empty list is
    /// passed downstream.
    pub glob_patterns: Option<Vec<String>>,

    /// Restrict manifest derivation to assets belonging to these named
    /// bundles. Empty means no restriction.
    pub chunks: Vec<String>,

    /// Drop assets belonging to these named bundles.
    pub exclude_chunks: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            include: Vec::new(),
            exclude: default_exclude(),
            dont_cache_bust_urls_matching: None,
            modify_url_prefix: BTreeMap::new(),
            max_file_size_to_cache_in_bytes: DEFAULT_MAX_FILE_SIZE,
            glob_patterns: None,
            chunks: Vec::new(),
            exclude_chunks: Vec::new(),
        }
    }
}

impl ManifestConfig {
    /// Validate this section, collecting findings into `diag`.
    ///
    /// Patterns are compiled once more at emission time; this pass exists so
    /// a bad regex fails the run before any build is scanned.
    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_patterns(&self.include, FieldPath::new("manifest.include"), diag);
        check_patterns(&self.exclude, FieldPath::new("manifest.exclude"), diag);
        if let Some(pattern) = &self.dont_cache_bust_urls_matching
            && let Err(err) = regex::Regex::new(pattern)
        {
            diag.error(
                FieldPath::new("manifest.dont_cache_bust_urls_matching"),
                format!("invalid pattern `{pattern}`: {err}"),
            );
        }
        if self.filename.is_empty() {
            diag.error(FieldPath::new("manifest.filename"), "must not be empty");
        }
    }
}

fn check_patterns(patterns: &[String], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for pattern in patterns {
        if let Err(err) = regex::Regex::new(pattern) {
            diag.error(field, format!("invalid pattern `{pattern}`: {err}"));
        }
    }
}
