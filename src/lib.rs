//! swgen - service worker generation for finished builds.
//!
//! Given the output set a build produced, swgen derives a precache manifest,
//! hashes it into a cache-busting filename, resolves the runtime-support
//! imports the worker needs, and emits both the manifest and the generated
//! worker back into the build output.
//!
//! # Module Structure
//!
//! | Module        | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `compilation` | The build output set boundary                  |
//! | `config`      | `swgen.toml` loading and validation            |
//! | `manifest`    | Entry derivation, serialization, naming        |
//! | `imports`     | Runtime-import resolution                      |
//! | `generate`    | Sanitized config + script generation boundary  |
//! | `pipeline`    | The emission orchestrator                      |
//! | `embed`       | Embedded worker template and runtime script    |
//! | `cli`         | Command-line driver                            |
//!
//! # Embedding
//!
//! Host build tools construct a [`compilation::Compilation`] from their own
//! finalized output, then run [`pipeline::emit`] at their "before outputs
//! are written" point:
//!
//! ```
//! use swgen::compilation::Compilation;
//! use swgen::config::SwgenConfig;
//! use swgen::generate::TemplateGenerator;
//!
//! let mut compilation = Compilation::new("");
//! compilation.emit_asset("app.js", b"console.log(1)".to_vec());
//!
//! let config = SwgenConfig::default();
//! let summary = swgen::pipeline::emit(
//!     &mut compilation,
//!     &config,
//!     &TemplateGenerator::new(),
//! ).unwrap();
//! assert_eq!(summary.entry_count, 1);
//! ```

pub mod cli;
pub mod compilation;
pub mod config;
pub mod embed;
pub mod generate;
pub mod imports;
pub mod logger;
pub mod manifest;
pub mod pipeline;
pub mod utils;
