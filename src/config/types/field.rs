//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A wrapper for config field paths as they appear in `swgen.toml`.
///
/// Diagnostics carry the path of the offending field (e.g.
/// `manifest.exclude`) so the user can jump straight to it.
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::new("manifest.filename"), "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
