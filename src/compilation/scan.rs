//! Build directory scanning.
//!
//! Turns a finished build directory on disk into a [`Compilation`] for the
//! CLI. Host build tools that embed the pipeline construct their
//! `Compilation` directly and never touch this module.
//!
//! Entries are walked in sorted order so repeated scans of unchanged output
//! discover assets identically, which keeps the manifest (and its hash)
//! byte-stable across runs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Compilation;
use crate::debug;
use crate::utils::path::to_forward_slashes;

/// Files never treated as build output.
const IGNORED_FILE_NAMES: &[&str] = &[".DS_Store"];

/// Scan a build directory into a `Compilation`.
///
/// `skip` lists asset names that belong to this pipeline's own previous
/// output (the configured worker destination); re-ingesting them would make
/// a second run precache the first run's artifacts.
///
/// An unreadable file is a degraded input, not a failure: it is skipped
/// with a warning and the scan continues.
pub fn scan_build_dir(dir: &Path, public_path: &str, skip: &[String]) -> Result<Compilation> {
    let mut compilation = Compilation::new(public_path);
    scan_recursive(&mut compilation, dir, dir, skip)
        .with_context(|| format!("Failed to scan build directory {}", dir.display()))?;
    Ok(compilation)
}

fn scan_recursive(
    compilation: &mut Compilation,
    dir: &Path,
    base: &Path,
    skip: &[String],
) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            scan_recursive(compilation, &path, base, skip)?;
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && IGNORED_FILE_NAMES.contains(&name)
        {
            continue;
        }

        let rel = path.strip_prefix(base).unwrap_or(&path);
        let name = to_forward_slashes(rel);
        if skip.iter().any(|s| s == &name) {
            debug!("scan"; "skipping own output {}", name);
            continue;
        }

        match fs::read(&path) {
            Ok(content) => compilation.emit_asset(name, content),
            Err(err) => compilation.warn(format!(
                "could not read {}, excluding it from the precache manifest: {err}",
                path.display()
            )),
        }
    }

    Ok(())
}
