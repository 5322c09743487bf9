//! The emission pipeline.
//!
//! One linear pass per build, run at the host's "outputs are about to be
//! finalized" point:
//!
//! 1. Non-fatal configuration findings become build warnings.
//! 2. Resolve the runtime import.
//! 3. Build, serialize, hash, and name the manifest; register it.
//! 4. Assemble the final import-scripts ordering.
//! 5. Sanitize the configuration and invoke the generation service.
//! 6. Register the generated worker at its destination (overwrite).
//!
//! Steps 2-5 are fatal on failure; nothing is retried. The host re-invokes
//! the whole pass on its next build for recovery.

mod error;

pub use error::EmitError;

use crate::compilation::Compilation;
use crate::config::SwgenConfig;
use crate::generate::{self, ScriptGenerator};
use crate::imports;
use crate::manifest;
use crate::utils::path::{join_name, to_forward_slashes};

/// What one emission pass produced.
#[derive(Debug)]
pub struct EmitSummary {
    /// Manifest asset name (relative to the output root).
    pub manifest_name: String,
    /// Public URL of the manifest, as imported by the worker.
    pub manifest_url: String,
    /// Content hash substituted into the manifest filename.
    pub manifest_hash: String,
    /// Worker asset name (relative to the output root).
    pub sw_dest: String,
    /// Number of precache entries in the manifest.
    pub entry_count: usize,
    /// Every asset name this pass registered, in emission order.
    pub emitted: Vec<String>,
}

/// Run one emission pass against a finalized build output set.
pub fn emit(
    compilation: &mut Compilation,
    config: &SwgenConfig,
    generator: &dyn ScriptGenerator,
) -> Result<EmitSummary, EmitError> {
    // 1. Findings here never abort the pass.
    if config.sw.handle_fetch.is_some() {
        compilation.warn("sw.handle_fetch is no longer supported and was ignored");
    }

    // 2. Runtime import (may append the local runtime to the output set).
    let resolved = imports::resolve(compilation, config)?;
    let mut emitted: Vec<String> = resolved.emitted_runtime.iter().cloned().collect();

    // 3. Manifest: derive, serialize, hash, name, register.
    let outcome = manifest::build_entries(compilation, config)?;
    for warning in outcome.warnings {
        compilation.warn(warning);
    }

    let text = manifest::serialize_entries(&outcome.entries)?;
    let hash = manifest::manifest_hash(&text);
    let filename = manifest::substitute_hash(&config.manifest.filename, &hash)?;
    let manifest_name = join_name(&config.imports.directory, &filename);
    compilation.emit_asset(&manifest_name, text.into_bytes());
    emitted.push(manifest_name.clone());
    let manifest_url = compilation.asset_url(&manifest_name);

    // 4. Final ordering: bundle prepends, then user scripts, manifest last.
    let mut import_scripts = resolved.prepend;
    import_scripts.extend(config.imports.scripts.iter().cloned());
    import_scripts.push(manifest_url.clone());

    // 5. Sanitize and generate; warnings pass through verbatim.
    let generate_config = generate::sanitize(config, import_scripts, resolved.workbox_sw_import);
    let script = generator
        .generate(&generate_config)
        .map_err(EmitError::Generate)?;
    for warning in script.warnings {
        compilation.warn(warning);
    }

    // 6. Register the worker, overwriting anything already at the path.
    let sw_dest = to_forward_slashes(&config.sw.dest);
    compilation.emit_asset(&sw_dest, script.text.into_bytes());
    emitted.push(sw_dest.clone());

    Ok(EmitSummary {
        manifest_name,
        manifest_url,
        manifest_hash: hash,
        sw_dest,
        entry_count: outcome.entries.len(),
        emitted,
    })
}
