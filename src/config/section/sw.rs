//! `[sw]` section configuration.
//!
//! Destination of the generated service worker plus the options forwarded to
//! the script generator. Everything here except `dest` survives
//! sanitization and reaches the generator.
//!
//! # Example
//!
//! ```toml
//! [sw]
//! dest = "sw.js"
//! cache_id = "my-app"
//! skip_waiting = true
//! clients_claim = true
//! navigate_fallback = "/index.html"
//! navigate_fallback_whitelist = ["^/app/"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Service worker generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwConfig {
    /// Output path of the generated worker, relative to the build output
    /// root.
    pub dest: PathBuf,

    /// Cache name prefix so multiple apps on one origin stay separate.
    pub cache_id: Option<String>,

    /// Activate a new worker version as soon as it finishes installing.
    pub skip_waiting: bool,

    /// Take control of uncontrolled clients on activation.
    pub clients_claim: bool,

    /// URL served for navigation requests that miss the cache.
    pub navigate_fallback: Option<String>,

    /// Regex sources limiting which navigations use the fallback.
    pub navigate_fallback_whitelist: Vec<String>,

    /// Queue analytics pings while offline and replay them later.
    pub offline_google_analytics: bool,

    /// Removed v2-era option. Accepted so old configs still parse, but it
    /// no longer does anything.
    pub handle_fetch: Option<bool>,
}

impl Default for SwConfig {
    fn default() -> Self {
        Self {
            dest: PathBuf::from("sw.js"),
            cache_id: None,
            skip_waiting: false,
            clients_claim: false,
            navigate_fallback: None,
            navigate_fallback_whitelist: Vec::new(),
            offline_google_analytics: false,
            handle_fetch: None,
        }
    }
}

impl SwConfig {
    /// Validate this section, collecting findings into `diag`.
    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dest.as_os_str().is_empty() {
            diag.error(FieldPath::new("sw.dest"), "must not be empty");
        }

        if self.handle_fetch.is_some() {
            diag.warn(
                FieldPath::new("sw.handle_fetch"),
                "no longer supported and ignored",
            );
        }

        if !self.navigate_fallback_whitelist.is_empty() && self.navigate_fallback.is_none() {
            diag.warn(
                FieldPath::new("sw.navigate_fallback_whitelist"),
                "has no effect without sw.navigate_fallback",
            );
        }
    }
}
