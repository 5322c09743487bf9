//! Pipeline configuration management for `swgen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── sw         # [sw]
//! │   ├── manifest   # [manifest]
//! │   └── imports    # [imports]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SwgenConfig (this file)
//! ```
//!
//! One immutable configuration value is produced per run: built-in defaults
//! first, then whatever `swgen.toml` overrides, then CLI flags on top.
//! Unknown keys are reported as non-fatal warnings; the pipeline must keep
//! running unattended inside a host build.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{BuildConfig, ImportsConfig, ManifestConfig, SwConfig, WorkboxSource};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing swgen.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SwgenConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build input settings
    pub build: BuildConfig,

    /// Service worker destination and generation options
    pub sw: SwConfig,

    /// Precache manifest settings
    pub manifest: ManifestConfig,

    /// Runtime-import settings
    pub imports: ImportsConfig,
}

impl SwgenConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; a missing file is not
    /// an error since every field has a usable default. The project root is
    /// the config file's parent directory, or cwd without one.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => Self::from_path(&path)?,
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::warn_unknown_fields(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields. Non-fatal: the run continues with the
    /// fields ignored.
    fn warn_unknown_fields(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

        self.apply_command_options(cli);

        // Resolve the build directory against the project root
        if self.build.output.is_relative() {
            self.build.output = self.root.join(&self.build.output);
        }
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Generate { args } => {
                crate::logger::set_verbose(args.verbose);
                if let Some(output) = &args.output {
                    self.build.output = output.clone();
                }
                if let Some(public_path) = &args.public_path {
                    self.build.public_path = public_path.clone();
                }
            }
            Commands::Init { .. } => {}
        }
    }

    /// Full validation. Deprecation warnings are printed and the run
    /// continues; errors abort with `ConfigError::Diagnostics`.
    fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        self.sw.validate(&mut diag);
        self.manifest.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// The directory holding the finished build output.
    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }
}

/// Parse a config snippet for tests, asserting it has no unknown fields.
#[cfg(test)]
pub(crate) fn test_parse_config(extra: &str) -> SwgenConfig {
    let (parsed, ignored) = SwgenConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
