//! The `init` command: write a commented default `swgen.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::log;

/// Default configuration template with every section documented.
const DEFAULT_CONFIG: &str = r#"# swgen configuration
# Every field is optional; the values below are the defaults.

[build]
# Directory holding the finished build output.
output = "dist"
# Public URL prefix for asset references ("" = relative URLs).
public_path = ""

[sw]
# Output path of the generated service worker, relative to the build output.
dest = "sw.js"
# Cache name prefix, keeps apps on a shared origin apart.
# cache_id = "my-app"
# Activate new worker versions immediately.
skip_waiting = false
# Take control of open pages on activation.
clients_claim = false
# URL served for navigations that miss the cache.
# navigate_fallback = "/index.html"
# Regex sources limiting which navigations use the fallback.
# navigate_fallback_whitelist = ["^/app/"]
offline_google_analytics = false

[manifest]
# Filename template for the manifest artifact; [manifestHash] is replaced
# with a content hash of the manifest.
filename = "precache-manifest.[manifestHash].js"
# Regexes over asset names to drop from the manifest.
exclude = ['\.map$', '(^|/)precache-manifest\.', '(^|/)workbox-sw\.']
# Treat matching URLs as already content-hashed (null revision).
# dont_cache_bust_urls_matching = '\.[0-9a-f]{8}\.'
# Assets over this size are excluded with a warning.
max_file_size_to_cache_in_bytes = 2097152

[imports]
# Runtime support source: "cdn", "local", "disabled", or a bundle name.
workbox_from = "cdn"
# Extra scripts the worker imports before running.
scripts = []
# Subdirectory for emitted pipeline artifacts.
directory = ""
"#;

/// Write the default config, refusing to clobber without `--force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
