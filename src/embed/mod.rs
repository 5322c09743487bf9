//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `sw` - The generated service worker skeleton
//! - `runtime` - The bundled runtime support library for local imports
//!
//! # Usage
//!
//! ```ignore
//! use embed::sw::{SW_TEMPLATE, SwVars};
//!
//! let script = SW_TEMPLATE.render(&SwVars { .. });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod sw {
    use super::{Template, TemplateVars};

    /// Statement slots filled in by the script generator. Empty slots
    /// render as empty lines.
    pub struct SwVars {
        /// The runtime support import, emitted before any other statement.
        pub workbox_import: String,
        /// Cache naming and lifecycle statements.
        pub setup: String,
        /// The combined `importScripts(...)` statement.
        pub import_scripts: String,
        /// The precache registration statement.
        pub precache: String,
        /// Navigation fallback and analytics statements.
        pub routing: String,
    }

    impl TemplateVars for SwVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__SWGEN_WORKBOX_IMPORT__", &self.workbox_import)
                .replace("__SWGEN_SETUP__", &self.setup)
                .replace("__SWGEN_IMPORT_SCRIPTS__", &self.import_scripts)
                .replace("__SWGEN_PRECACHE__", &self.precache)
                .replace("__SWGEN_ROUTING__", &self.routing)
        }
    }

    /// Service worker skeleton with typed variable injection.
    pub const SW_TEMPLATE: Template<SwVars> = Template::new(include_str!("sw.js"));
}

pub mod runtime {
    use crate::utils::hash;

    /// The bundled runtime support library.
    pub const WORKBOX_SW_JS: &str = include_str!("workbox-sw.js");

    /// Content-hashed filename for the bundled runtime, so a new swgen
    /// release busts caches of the old copy.
    pub fn asset_filename() -> String {
        format!("workbox-sw.{}.js", hash::revision(WORKBOX_SW_JS))
    }
}
