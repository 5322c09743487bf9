//! Built-in script generator.
//!
//! Renders the service worker from the embedded skeleton. String values are
//! injected through `serde_json::to_string`, which yields valid JS string
//! literals with all escaping handled.

use anyhow::Result;

use super::{GenerateConfig, GeneratedScript, ScriptGenerator};
use crate::embed::sw::{SW_TEMPLATE, SwVars};

/// Generator backed by the embedded service worker template.
#[derive(Debug, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptGenerator for TemplateGenerator {
    fn generate(&self, config: &GenerateConfig) -> Result<GeneratedScript> {
        let mut warnings = Vec::new();

        if !config.glob_patterns.is_empty() {
            warnings.push(
                "glob_patterns are resolved by the build pipeline; the built-in generator \
                 ignores them"
                    .to_string(),
            );
        }

        let workbox_import = config
            .workbox_sw_import
            .as_deref()
            .map(|url| format!("importScripts({});", js_string(url)))
            .unwrap_or_default();

        let script = SW_TEMPLATE.render(&SwVars {
            workbox_import,
            setup: setup_statements(config),
            import_scripts: import_scripts_statement(&config.import_scripts),
            precache: precache_statement(config)?,
            routing: routing_statements(config),
        });

        Ok(GeneratedScript {
            text: collapse_blank_lines(&script),
            warnings,
        })
    }
}

fn setup_statements(config: &GenerateConfig) -> String {
    let mut out = Vec::new();
    if let Some(cache_id) = &config.cache_id {
        out.push(format!(
            "workbox.core.setCacheNameDetails({{ prefix: {} }});",
            js_string(cache_id)
        ));
    }
    if config.skip_waiting {
        out.push("workbox.skipWaiting();".to_string());
    }
    if config.clients_claim {
        out.push("workbox.clientsClaim();".to_string());
    }
    out.join("\n")
}

fn import_scripts_statement(urls: &[String]) -> String {
    if urls.is_empty() {
        return String::new();
    }
    let args: Vec<String> = urls.iter().map(|u| js_string(u)).collect();
    format!("importScripts(\n  {}\n);", args.join(",\n  "))
}

fn precache_statement(config: &GenerateConfig) -> Result<String> {
    if config.precache_entries.is_empty() {
        return Ok(
            "workbox.precaching.precacheAndRoute(self.__precacheManifest || []);".to_string(),
        );
    }
    let inline = serde_json::to_string(&config.precache_entries)?;
    Ok(format!(
        "workbox.precaching.precacheAndRoute((self.__precacheManifest || []).concat({inline}));"
    ))
}

fn routing_statements(config: &GenerateConfig) -> String {
    let mut out = Vec::new();
    if let Some(fallback) = &config.navigate_fallback {
        if config.navigate_fallback_whitelist.is_empty() {
            out.push(format!(
                "workbox.routing.registerNavigationRoute({});",
                js_string(fallback)
            ));
        } else {
            let whitelist: Vec<String> = config
                .navigate_fallback_whitelist
                .iter()
                .map(|p| format!("new RegExp({})", js_string(p)))
                .collect();
            out.push(format!(
                "workbox.routing.registerNavigationRoute({}, {{ whitelist: [{}] }});",
                js_string(fallback),
                whitelist.join(", ")
            ));
        }
    }
    if config.offline_google_analytics {
        out.push("workbox.googleAnalytics.initialize();".to_string());
    }
    out.join("\n")
}

/// Encode a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".into())
}

/// Empty template slots leave runs of blank lines behind; squash them.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
