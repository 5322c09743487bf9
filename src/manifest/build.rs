//! Manifest derivation from the build output set.
//!
//! Walks the compilation's assets in discovery order, applies chunk scoping
//! and include/exclude filters, rewrites URL prefixes, and hashes whatever
//! survives. Degraded inputs (oversized assets, unknown chunk names) turn
//! into warnings; a post-transform URL collision is fatal because a manifest
//! with two revisions for one URL cannot be precached coherently.

use rayon::prelude::*;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use super::ManifestEntry;
use crate::compilation::{BuildAsset, Compilation};
use crate::config::SwgenConfig;
use crate::pipeline::EmitError;
use crate::utils::hash;

/// Entries plus the warnings gathered while deriving them.
#[derive(Debug)]
pub struct ManifestOutcome {
    pub entries: Vec<ManifestEntry>,
    pub warnings: Vec<String>,
}

/// Compiled per-entry filters.
struct ManifestFilters {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
    dont_cache_bust: Option<Regex>,
}

impl ManifestFilters {
    fn compile(config: &SwgenConfig) -> Result<Self, EmitError> {
        Ok(Self {
            include: compile_all(&config.manifest.include, "manifest.include")?,
            exclude: compile_all(&config.manifest.exclude, "manifest.exclude")?,
            dont_cache_bust: config
                .manifest
                .dont_cache_bust_urls_matching
                .as_deref()
                .map(|p| compile(p, "manifest.dont_cache_bust_urls_matching"))
                .transpose()?,
        })
    }

    /// Whether an asset name passes include/exclude filtering.
    fn keeps(&self, name: &str) -> bool {
        if self.exclude.iter().any(|re| re.is_match(name)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|re| re.is_match(name))
    }
}

fn compile(pattern: &str, field: &'static str) -> Result<Regex, EmitError> {
    Regex::new(pattern).map_err(|source| EmitError::Pattern {
        field,
        source: Box::new(source),
    })
}

fn compile_all(patterns: &[String], field: &'static str) -> Result<Vec<Regex>, EmitError> {
    patterns.iter().map(|p| compile(p, field)).collect()
}

/// Derive precache entries from the build output set.
///
/// Order of the returned entries follows the compilation's discovery order.
pub fn build_entries(
    compilation: &Compilation,
    config: &SwgenConfig,
) -> Result<ManifestOutcome, EmitError> {
    let filters = ManifestFilters::compile(config)?;
    let mut warnings = Vec::new();

    let scope = ChunkScope::resolve(compilation, config, &mut warnings);
    let max_size = config.manifest.max_file_size_to_cache_in_bytes;

    // Select candidates in discovery order, then hash them in parallel.
    let mut candidates: Vec<(&BuildAsset, String)> = Vec::new();
    for asset in compilation.assets() {
        if !scope.keeps(&asset.name) || !filters.keeps(&asset.name) {
            continue;
        }
        if asset.size() > max_size {
            warnings.push(format!(
                "{} is {} bytes, over manifest.max_file_size_to_cache_in_bytes ({}); \
                 excluding it from the precache manifest",
                asset.name,
                asset.size(),
                max_size
            ));
            continue;
        }

        let url = rewrite_prefix(
            &compilation.asset_url(&asset.name),
            &config.manifest.modify_url_prefix,
        );
        candidates.push((asset, url));
    }

    let entries: Vec<ManifestEntry> = candidates
        .par_iter()
        .map(|(asset, url)| {
            let revision = match &filters.dont_cache_bust {
                Some(re) if re.is_match(url) => None,
                _ => Some(hash::revision(&asset.content)),
            };
            ManifestEntry::new(url.clone(), revision)
        })
        .collect();

    // Uniqueness invariant: no two entries may share a url.
    let mut seen = FxHashSet::default();
    for entry in &entries {
        if !seen.insert(entry.url.as_str()) {
            return Err(EmitError::DuplicateUrl(entry.url.clone()));
        }
    }

    Ok(ManifestOutcome { entries, warnings })
}

/// Apply the longest matching `modify_url_prefix` rewrite, if any.
fn rewrite_prefix(
    url: &str,
    prefixes: &std::collections::BTreeMap<String, String>,
) -> String {
    let best = prefixes
        .iter()
        .filter(|(from, _)| url.starts_with(from.as_str()))
        .max_by_key(|(from, _)| from.len());
    match best {
        Some((from, to)) => format!("{to}{}", &url[from.len()..]),
        None => url.to_string(),
    }
}

/// Chunk scoping: which asset names are in play, per `manifest.chunks` /
/// `manifest.exclude_chunks`.
enum ChunkScope {
    /// No chunk filters configured.
    All,
    /// Only these names, minus the denied set.
    Restricted {
        allowed: FxHashSet<String>,
        denied: FxHashSet<String>,
    },
    /// Everything except the denied set.
    Except { denied: FxHashSet<String> },
}

impl ChunkScope {
    fn resolve(
        compilation: &Compilation,
        config: &SwgenConfig,
        warnings: &mut Vec<String>,
    ) -> Self {
        let chunks = &config.manifest.chunks;
        let exclude_chunks = &config.manifest.exclude_chunks;
        if chunks.is_empty() && exclude_chunks.is_empty() {
            return Self::All;
        }

        let by_name: FxHashMap<&str, &[String]> = compilation
            .chunks()
            .iter()
            .map(|c| (c.name.as_str(), c.files.as_slice()))
            .collect();

        let mut collect = |names: &[String], field: &str| -> FxHashSet<String> {
            let mut files = FxHashSet::default();
            for name in names {
                match by_name.get(name.as_str()) {
                    Some(chunk_files) => files.extend(chunk_files.iter().cloned()),
                    None => warnings.push(format!(
                        "{field} names bundle `{name}`, which this build did not produce"
                    )),
                }
            }
            files
        };

        let denied = collect(exclude_chunks, "manifest.exclude_chunks");
        if chunks.is_empty() {
            Self::Except { denied }
        } else {
            Self::Restricted {
                allowed: collect(chunks, "manifest.chunks"),
                denied,
            }
        }
    }

    fn keeps(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Restricted { allowed, denied } => {
                allowed.contains(name) && !denied.contains(name)
            }
            Self::Except { denied } => !denied.contains(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn compilation(files: &[(&str, &str)]) -> Compilation {
        let mut c = Compilation::new("");
        for (name, content) in files {
            c.emit_asset(*name, content.as_bytes().to_vec());
        }
        c
    }

    #[test]
    fn test_entries_follow_discovery_order() {
        let c = compilation(&[("z.js", "z"), ("a.css", "a"), ("m.html", "m")]);
        let config = test_parse_config("");
        let outcome = build_entries(&c, &config).unwrap();

        let urls: Vec<_> = outcome.entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["z.js", "a.css", "m.html"]);
    }

    #[test]
    fn test_revisions_hash_content() {
        let c = compilation(&[("app.js", "console.log(1)")]);
        let config = test_parse_config("");
        let outcome = build_entries(&c, &config).unwrap();

        let entry = &outcome.entries[0];
        assert_eq!(entry.revision.as_deref(), Some(hash::revision("console.log(1)").as_str()));
    }

    #[test]
    fn test_default_exclude_drops_source_maps() {
        let c = compilation(&[("app.js", "x"), ("app.js.map", "y")]);
        let config = test_parse_config("");
        let outcome = build_entries(&c, &config).unwrap();

        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].url, "app.js");
    }

    #[test]
    fn test_default_exclude_drops_prior_artifacts() {
        let c = compilation(&[
            ("app.js", "x"),
            ("wb-assets/precache-manifest.deadbeef.js", "old"),
            ("wb-assets/workbox-sw.cafe.js", "old"),
        ]);
        let config = test_parse_config("");
        let outcome = build_entries(&c, &config).unwrap();
        assert_eq!(outcome.entries.len(), 1);
    }

    #[test]
    fn test_include_restricts() {
        let c = compilation(&[("app.js", "x"), ("readme.txt", "y")]);
        let config = test_parse_config("[manifest]\ninclude = ['\\.js$']");
        let outcome = build_entries(&c, &config).unwrap();

        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].url, "app.js");
    }

    #[test]
    fn test_oversized_asset_warns_and_skips() {
        let c = compilation(&[("big.bin", "0123456789"), ("small.js", "x")]);
        let config = test_parse_config("[manifest]\nmax_file_size_to_cache_in_bytes = 5");
        let outcome = build_entries(&c, &config).unwrap();

        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].url, "small.js");
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("big.bin"));
    }

    #[test]
    fn test_dont_cache_bust_nulls_revision() {
        let c = compilation(&[("app.3f2a9c1d.js", "hashed"), ("plain.js", "plain")]);
        let config = test_parse_config(
            "[manifest]\ndont_cache_bust_urls_matching = '\\.[0-9a-f]{8}\\.'",
        );
        let outcome = build_entries(&c, &config).unwrap();

        assert_eq!(outcome.entries[0].revision, None);
        assert!(outcome.entries[1].revision.is_some());
    }

    #[test]
    fn test_modify_url_prefix_longest_wins() {
        let c = compilation(&[("static/js/app.js", "x")]);
        let config = test_parse_config(
            "[manifest.modify_url_prefix]\n\"static/\" = \"s/\"\n\"static/js/\" = \"cdn/\"",
        );
        let outcome = build_entries(&c, &config).unwrap();
        assert_eq!(outcome.entries[0].url, "cdn/app.js");
    }

    #[test]
    fn test_prefix_collision_is_fatal() {
        let c = compilation(&[("a/app.js", "1"), ("b/app.js", "2")]);
        let config = test_parse_config(
            "[manifest.modify_url_prefix]\n\"a/\" = \"\"\n\"b/\" = \"\"",
        );
        let err = build_entries(&c, &config).unwrap_err();
        assert!(matches!(err, EmitError::DuplicateUrl(url) if url == "app.js"));
    }

    #[test]
    fn test_chunk_scoping() {
        let mut c = compilation(&[("app.js", "a"), ("vendor.js", "v"), ("admin.js", "x")]);
        c.add_chunk("app", vec!["app.js".into()]);
        c.add_chunk("vendor", vec!["vendor.js".into()]);

        let config = test_parse_config("[manifest]\nchunks = [\"app\", \"vendor\"]");
        let outcome = build_entries(&c, &config).unwrap();
        let urls: Vec<_> = outcome.entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["app.js", "vendor.js"]);
    }

    #[test]
    fn test_exclude_chunks() {
        let mut c = compilation(&[("app.js", "a"), ("admin.js", "x")]);
        c.add_chunk("admin", vec!["admin.js".into()]);

        let config = test_parse_config("[manifest]\nexclude_chunks = [\"admin\"]");
        let outcome = build_entries(&c, &config).unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].url, "app.js");
    }

    #[test]
    fn test_unknown_chunk_warns() {
        let c = compilation(&[("app.js", "a")]);
        let config = test_parse_config("[manifest]\nchunks = [\"ghost\"]");
        let outcome = build_entries(&c, &config).unwrap();

        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("ghost"));
    }

    #[test]
    fn test_public_path_prefixes_urls() {
        let mut c = Compilation::new("/static/");
        c.emit_asset("app.js", b"x".to_vec());
        let config = test_parse_config("");
        let outcome = build_entries(&c, &config).unwrap();
        assert_eq!(outcome.entries[0].url, "/static/app.js");
    }

    #[test]
    fn test_bad_runtime_pattern_is_fatal() {
        // Validation normally catches this, but library callers can hand the
        // pipeline an unvalidated config.
        let mut config = test_parse_config("");
        config.manifest.exclude = vec!["[".to_string()];
        let c = compilation(&[("app.js", "x")]);
        assert!(matches!(
            build_entries(&c, &config),
            Err(EmitError::Pattern { .. })
        ));
    }
}
