//! The finalized build output set.
//!
//! A [`Compilation`] is the interface boundary to the host build tool: a
//! read-mostly collection of finished build artifacts, the named bundles
//! ("chunks") they belong to, and a warning list. The emission pipeline only
//! ever appends to it - new assets via [`Compilation::emit_asset`], findings
//! via [`Compilation::warn`].
//!
//! Asset names are forward-slash paths relative to the build output root.
//! Discovery order is preserved; the manifest is derived in this order.

pub mod scan;

use rustc_hash::FxHashMap;

use crate::utils::path::join_url;

/// One finished build artifact.
#[derive(Debug, Clone)]
pub struct BuildAsset {
    /// Forward-slash path relative to the output root.
    pub name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl BuildAsset {
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A named bundle: a build-tool-defined group of output files.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub name: String,
    /// Asset names belonging to this bundle, in the build tool's order.
    pub files: Vec<String>,
}

/// The build output set at emission time.
#[derive(Debug, Default)]
pub struct Compilation {
    assets: Vec<BuildAsset>,
    index: FxHashMap<String, usize>,
    chunks: Vec<Chunk>,
    warnings: Vec<String>,
    public_path: String,
}

impl Compilation {
    pub fn new(public_path: impl Into<String>) -> Self {
        Self {
            public_path: public_path.into(),
            ..Self::default()
        }
    }

    /// Register an asset. An existing asset with the same name is
    /// overwritten in place, keeping its discovery position.
    pub fn emit_asset(&mut self, name: impl Into<String>, content: Vec<u8>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.assets[pos].content = content,
            None => {
                self.index.insert(name.clone(), self.assets.len());
                self.assets.push(BuildAsset { name, content });
            }
        }
    }

    pub fn asset(&self, name: &str) -> Option<&BuildAsset> {
        self.index.get(name).map(|&pos| &self.assets[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All assets in discovery order.
    pub fn assets(&self) -> &[BuildAsset] {
        &self.assets
    }

    pub fn add_chunk(&mut self, name: impl Into<String>, files: Vec<String>) {
        self.chunks.push(Chunk {
            name: name.into(),
            files,
        });
    }

    pub fn chunk(&self, name: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.name == name)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Attach a non-fatal warning to this build.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    /// Public URL for an asset name.
    pub fn asset_url(&self, name: &str) -> String {
        join_url(&self.public_path, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_asset_preserves_order() {
        let mut compilation = Compilation::new("");
        compilation.emit_asset("app.js", b"a".to_vec());
        compilation.emit_asset("app.css", b"b".to_vec());
        compilation.emit_asset("index.html", b"c".to_vec());

        let names: Vec<_> = compilation.assets().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["app.js", "app.css", "index.html"]);
    }

    #[test]
    fn test_emit_asset_overwrites_in_place() {
        let mut compilation = Compilation::new("");
        compilation.emit_asset("sw.js", b"old".to_vec());
        compilation.emit_asset("other.js", b"x".to_vec());
        compilation.emit_asset("sw.js", b"new".to_vec());

        assert_eq!(compilation.assets().len(), 2);
        assert_eq!(compilation.asset("sw.js").unwrap().content, b"new");
        assert_eq!(compilation.assets()[0].name, "sw.js");
    }

    #[test]
    fn test_asset_lookup() {
        let mut compilation = Compilation::new("");
        compilation.emit_asset("a.js", vec![1, 2, 3]);
        assert!(compilation.contains("a.js"));
        assert_eq!(compilation.asset("a.js").unwrap().size(), 3);
        assert!(compilation.asset("missing.js").is_none());
    }

    #[test]
    fn test_chunks() {
        let mut compilation = Compilation::new("");
        compilation.add_chunk("app", vec!["a.js".into(), "a.css".into()]);
        assert_eq!(compilation.chunk("app").unwrap().files.len(), 2);
        assert!(compilation.chunk("vendor").is_none());
    }

    #[test]
    fn test_asset_url_joins_public_path() {
        let compilation = Compilation::new("/static/");
        assert_eq!(compilation.asset_url("app.js"), "/static/app.js");

        let compilation = Compilation::new("");
        assert_eq!(compilation.asset_url("app.js"), "app.js");
    }

    #[test]
    fn test_warnings_accumulate() {
        let mut compilation = Compilation::new("");
        compilation.warn("first");
        compilation.warn("second");
        assert_eq!(compilation.warnings(), &["first", "second"]);
    }
}
