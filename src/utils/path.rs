//! Path and URL joining utilities.
//!
//! Asset names inside a [`Compilation`](crate::compilation::Compilation) and
//! all URLs embedded in generated script text use forward slashes regardless
//! of host filesystem convention. These helpers are the single place that
//! normalization happens.

use std::path::Path;

/// Render a path with forward-slash separators.
///
/// Empty components are dropped, so `a//b` and `a\b` both become `a/b`.
pub fn to_forward_slashes(path: &Path) -> String {
    path.iter()
        .filter_map(|c| c.to_str())
        .filter(|s| !s.is_empty() && *s != "/")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join two URL-ish segments with exactly one slash between them.
///
/// An empty prefix leaves `rest` untouched (relative URLs stay relative,
/// matching a build with no public path configured).
///
/// # Examples
/// ```
/// use swgen::utils::path::join_url;
/// assert_eq!(join_url("", "app.js"), "app.js");
/// assert_eq!(join_url("/", "app.js"), "/app.js");
/// assert_eq!(join_url("/static/", "/app.js"), "/static/app.js");
/// assert_eq!(join_url("https://cdn.example.com/site", "a/b.js"),
///            "https://cdn.example.com/site/a/b.js");
/// ```
pub fn join_url(prefix: &str, rest: &str) -> String {
    if prefix.is_empty() {
        return rest.to_string();
    }
    let rest = rest.trim_start_matches('/');
    if prefix.ends_with('/') {
        format!("{prefix}{rest}")
    } else {
        format!("{prefix}/{rest}")
    }
}

/// Join path segments relative to the build output root.
///
/// Produces a forward-slash name suitable for registering into the build
/// output set. Empty segments vanish, so an unset subdirectory collapses
/// cleanly: `join_name("", "precache-manifest.abc.js")` is just the filename.
pub fn join_name(directory: &str, filename: &str) -> String {
    let dir = directory.trim_matches('/');
    if dir.is_empty() {
        filename.to_string()
    } else {
        format!("{dir}/{filename}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_forward_slashes() {
        assert_eq!(to_forward_slashes(Path::new("a/b/c.js")), "a/b/c.js");
        assert_eq!(to_forward_slashes(Path::new("sw.js")), "sw.js");
        assert_eq!(to_forward_slashes(&PathBuf::from("a").join("b")), "a/b");
    }

    #[test]
    fn test_to_forward_slashes_strips_leading_root() {
        assert_eq!(to_forward_slashes(Path::new("/a/b")), "a/b");
    }

    #[test]
    fn test_join_url_empty_prefix() {
        assert_eq!(join_url("", "app.js"), "app.js");
        assert_eq!(join_url("", "/app.js"), "/app.js");
    }

    #[test]
    fn test_join_url_slash_handling() {
        assert_eq!(join_url("/", "app.js"), "/app.js");
        assert_eq!(join_url("/static", "app.js"), "/static/app.js");
        assert_eq!(join_url("/static/", "/app.js"), "/static/app.js");
    }

    #[test]
    fn test_join_url_absolute_prefix() {
        assert_eq!(
            join_url("https://cdn.example.com/", "wb-assets/m.js"),
            "https://cdn.example.com/wb-assets/m.js"
        );
    }

    #[test]
    fn test_join_name() {
        assert_eq!(join_name("", "m.js"), "m.js");
        assert_eq!(join_name("wb-assets", "m.js"), "wb-assets/m.js");
        assert_eq!(join_name("/wb-assets/", "m.js"), "wb-assets/m.js");
    }
}
