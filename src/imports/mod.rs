//! Runtime-import resolution.
//!
//! Decides where the generated worker's runtime support library comes from,
//! driven by `imports.workbox_from`:
//!
//! - `disabled` - no runtime import at all
//! - `cdn` - one fixed external URL
//! - `local` - the bundled copy, emitted into the build output here
//! - anything else - a named bundle already produced by the build
//!
//! The named-bundle case is a tri-state: exactly one script file resolves
//! directly; several script files cannot be told apart, so all of them are
//! prepended to the import list instead (they still load first); none is a
//! configuration error.

use crate::compilation::Compilation;
use crate::config::{SwgenConfig, WorkboxSource};
use crate::embed::runtime;
use crate::pipeline::EmitError;
use crate::utils::path::join_name;

/// The pinned CDN release of the runtime support library.
pub const WORKBOX_CDN_URL: &str =
    "https://storage.googleapis.com/workbox-cdn/releases/3.6.3/workbox-sw.js";

/// Script files found in a named bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleScripts {
    /// The bundle exists but produced no script files.
    NotFound,
    /// Exactly one script; usable as the runtime import directly.
    Single(String),
    /// Several scripts with no way to tell which holds the runtime.
    Multiple(Vec<String>),
}

/// Outcome of runtime-import resolution.
///
/// `workbox_sw_import` travels in its own slot because the generator emits
/// it before every other import; `prepend` goes to the front of the final
/// import-scripts list.
#[derive(Debug, Default)]
pub struct ResolvedImports {
    pub workbox_sw_import: Option<String>,
    pub prepend: Vec<String>,
    /// Asset name of the runtime copy emitted in local mode.
    pub emitted_runtime: Option<String>,
}

/// Resolve the runtime import for this pass.
///
/// Local mode appends the bundled runtime to the build output set, which is
/// why this takes the compilation mutably.
pub fn resolve(
    compilation: &mut Compilation,
    config: &SwgenConfig,
) -> Result<ResolvedImports, EmitError> {
    match &config.imports.workbox_from {
        WorkboxSource::Disabled => Ok(ResolvedImports::default()),

        WorkboxSource::Cdn => Ok(ResolvedImports {
            workbox_sw_import: Some(WORKBOX_CDN_URL.to_string()),
            ..ResolvedImports::default()
        }),

        WorkboxSource::Local => {
            let name = join_name(&config.imports.directory, &runtime::asset_filename());
            compilation.emit_asset(&name, runtime::WORKBOX_SW_JS.as_bytes().to_vec());
            Ok(ResolvedImports {
                workbox_sw_import: Some(compilation.asset_url(&name)),
                prepend: Vec::new(),
                emitted_runtime: Some(name),
            })
        }

        WorkboxSource::Bundle(bundle) => match bundle_scripts(compilation, bundle)? {
            BundleScripts::NotFound => Err(EmitError::EmptyBundle(bundle.clone())),
            BundleScripts::Single(url) => Ok(ResolvedImports {
                workbox_sw_import: Some(url),
                ..ResolvedImports::default()
            }),
            BundleScripts::Multiple(urls) => Ok(ResolvedImports {
                workbox_sw_import: None,
                prepend: urls,
                emitted_runtime: None,
            }),
        },
    }
}

/// Inspect a named bundle's file list for script files.
fn bundle_scripts(
    compilation: &Compilation,
    bundle: &str,
) -> Result<BundleScripts, EmitError> {
    let chunk = compilation
        .chunk(bundle)
        .ok_or_else(|| EmitError::BundleNotFound(bundle.to_string()))?;

    let mut urls: Vec<String> = chunk
        .files
        .iter()
        .filter(|f| is_script(f))
        .map(|f| compilation.asset_url(f))
        .collect();

    Ok(match urls.len() {
        0 => BundleScripts::NotFound,
        1 => BundleScripts::Single(urls.remove(0)),
        _ => BundleScripts::Multiple(urls),
    })
}

/// Whether a bundle file is a script, ignoring any query string.
fn is_script(name: &str) -> bool {
    let path = name.split('?').next().unwrap_or(name);
    path.ends_with(".js") || path.ends_with(".mjs")
}
