//! The `generate` command.
//!
//! Scans the configured build directory into a `Compilation`, runs one
//! emission pass with the built-in generator, and writes everything the
//! pass registered back to disk.

use std::fs;

use anyhow::{Context, Result, anyhow};

use crate::compilation::scan::scan_build_dir;
use crate::config::SwgenConfig;
use crate::generate::TemplateGenerator;
use crate::pipeline;
use crate::utils::path::to_forward_slashes;
use crate::{debug, log};

/// Run the full generate flow against a finished build.
pub fn run(config: &SwgenConfig) -> Result<()> {
    let output_dir = config.output_dir();

    // A previous run's worker must not end up precached by this one.
    let own_outputs = vec![to_forward_slashes(&config.sw.dest)];
    let mut compilation =
        scan_build_dir(output_dir, &config.build.public_path, &own_outputs)?;
    debug!("scan"; "found {} build assets", compilation.assets().len());

    let summary = pipeline::emit(&mut compilation, config, &TemplateGenerator::new())?;

    for name in &summary.emitted {
        let asset = compilation
            .asset(name)
            .ok_or_else(|| anyhow!("emitted asset `{name}` missing from compilation"))?;
        let path = output_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, &asset.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    for warning in compilation.warnings() {
        log!("warning"; "{}", warning);
    }

    log!("emit"; "{} entries -> {}", summary.entry_count, summary.manifest_name);
    log!("emit"; "service worker -> {}", summary.sw_dest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn build_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    fn config_for(dir: &TempDir, extra: &str) -> SwgenConfig {
        let mut config = test_parse_config(extra);
        config.build.output = dir.path().to_path_buf();
        config
    }

    #[test]
    fn test_run_writes_worker_and_manifest() {
        let dir = build_dir(&[("app.js", "js"), ("index.html", "<html>")]);
        let config = config_for(&dir, "");

        run(&config).unwrap();

        assert!(dir.path().join("sw.js").exists());
        let manifests: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .starts_with("precache-manifest.")
            })
            .collect();
        assert_eq!(manifests.len(), 1);
    }

    #[test]
    fn test_run_twice_is_stable() {
        let dir = build_dir(&[("app.js", "js")]);
        let config = config_for(&dir, "");

        run(&config).unwrap();
        let first: Vec<_> = manifest_names(dir.path());
        run(&config).unwrap();
        let second: Vec<_> = manifest_names(dir.path());

        // Same content, same manifest filename; the second run must not
        // precache the first run's worker.
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_run_writes_into_imports_directory() {
        let dir = build_dir(&[("app.js", "js")]);
        let config = config_for(
            &dir,
            "[imports]\ndirectory = \"wb-assets\"\nworkbox_from = \"local\"",
        );

        run(&config).unwrap();

        let nested: Vec<_> = fs::read_dir(dir.path().join("wb-assets"))
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(nested.iter().any(|n| n.starts_with("precache-manifest.")));
        assert!(nested.iter().any(|n| n.starts_with("workbox-sw.")));
    }

    #[test]
    fn test_run_fails_on_bad_template() {
        let dir = build_dir(&[("app.js", "js")]);
        let config = config_for(&dir, "[manifest]\nfilename = \"static-name.js\"");
        assert!(run(&config).is_err());
    }

    fn manifest_names(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("precache-manifest."))
            .collect();
        names.sort();
        names
    }
}
