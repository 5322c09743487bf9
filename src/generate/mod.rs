//! Configuration sanitization and the script-generation boundary.
//!
//! The generation service - whatever renders final service worker text - is
//! an external collaborator. It receives only the sanitized
//! [`GenerateConfig`] projection, never the pipeline's own knobs (filenames,
//! directories), and it is never consulted for manifest derivation: the
//! manifest always arrives out-of-band through the import list.

pub mod template;

pub use template::TemplateGenerator;

use anyhow::Result;
use serde::Serialize;

use crate::config::SwgenConfig;
use crate::manifest::ManifestEntry;

/// The exact field set the generation service accepts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateConfig {
    pub cache_id: Option<String>,
    pub skip_waiting: bool,
    pub clients_claim: bool,
    pub navigate_fallback: Option<String>,
    pub navigate_fallback_whitelist: Vec<String>,
    pub offline_google_analytics: bool,

    /// Always present, possibly empty. The pipeline supplies manifest
    /// entries explicitly and must not let the service glob on its own.
    pub glob_patterns: Vec<String>,

    /// Final ordered import list, manifest URL last.
    pub import_scripts: Vec<String>,

    /// The resolved runtime import; emitted before everything else.
    pub workbox_sw_import: Option<String>,

    /// Inline entries. This pipeline delivers the manifest via
    /// `import_scripts`, so it always leaves this empty.
    pub precache_entries: Vec<ManifestEntry>,
}

/// Project the full configuration onto the generation field set.
///
/// Pure function: pipeline-only fields (`sw.dest`, `imports.directory`,
/// `manifest.filename`, the filter knobs) simply do not appear in the
/// output. An unset `manifest.glob_patterns` becomes an explicit empty
/// list, overriding any default the service would otherwise apply.
pub fn sanitize(
    config: &SwgenConfig,
    import_scripts: Vec<String>,
    workbox_sw_import: Option<String>,
) -> GenerateConfig {
    GenerateConfig {
        cache_id: config.sw.cache_id.clone(),
        skip_waiting: config.sw.skip_waiting,
        clients_claim: config.sw.clients_claim,
        navigate_fallback: config.sw.navigate_fallback.clone(),
        navigate_fallback_whitelist: config.sw.navigate_fallback_whitelist.clone(),
        offline_google_analytics: config.sw.offline_google_analytics,
        glob_patterns: config.manifest.glob_patterns.clone().unwrap_or_default(),
        import_scripts,
        workbox_sw_import,
        precache_entries: Vec::new(),
    }
}

/// Text returned by a generation service.
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub text: String,
    /// Passed through verbatim into the build's warning list.
    pub warnings: Vec<String>,
}

/// The external generation service boundary.
pub trait ScriptGenerator {
    fn generate(&self, config: &GenerateConfig) -> Result<GeneratedScript>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_sanitize_defaults_glob_patterns_to_empty() {
        let config = test_parse_config("");
        let sanitized = sanitize(&config, vec![], None);
        assert!(sanitized.glob_patterns.is_empty());
    }

    #[test]
    fn test_sanitize_keeps_user_glob_patterns() {
        let config = test_parse_config("[manifest]\nglob_patterns = [\"**/*.html\"]");
        let sanitized = sanitize(&config, vec![], None);
        assert_eq!(sanitized.glob_patterns, vec!["**/*.html"]);
    }

    #[test]
    fn test_sanitize_threads_imports_through() {
        let config = test_parse_config("[sw]\nskip_waiting = true\ncache_id = \"shop\"");
        let sanitized = sanitize(
            &config,
            vec!["extra.js".into(), "precache-manifest.abc.js".into()],
            Some("workbox-sw.js".into()),
        );

        assert_eq!(sanitized.import_scripts, vec!["extra.js", "precache-manifest.abc.js"]);
        assert_eq!(sanitized.workbox_sw_import.as_deref(), Some("workbox-sw.js"));
        assert!(sanitized.skip_waiting);
        assert_eq!(sanitized.cache_id.as_deref(), Some("shop"));
        assert!(sanitized.precache_entries.is_empty());
    }

    #[test]
    fn test_sanitize_drops_pipeline_fields() {
        // The projection carries no filenames or directories; serialize it
        // and make sure none leak through.
        let config = test_parse_config(
            "[sw]\ndest = \"secret-dest.js\"\n[imports]\ndirectory = \"secret-dir\"",
        );
        let sanitized = sanitize(&config, vec![], None);
        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret-dest.js"));
        assert!(!json.contains("secret-dir"));
        assert!(!json.contains("[manifestHash]"));
    }
}
