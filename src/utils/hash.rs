//! Content hashing using blake3.
//!
//! All cache-busting in this crate derives from content hashes: asset
//! revisions, the manifest hash substituted into the manifest filename, and
//! the filename of the locally bundled runtime script. blake3 keeps the
//! digests deterministic across platforms and collision probability
//! negligible for arbitrary build outputs.

/// Hex length of a truncated digest used for revisions and filenames.
pub const DIGEST_LEN: usize = 32;

/// Compute the full blake3 digest of `data` as a hex string.
#[inline]
pub fn digest<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(blake3::hash(data.as_ref()).as_bytes())
}

/// Compute a truncated hex digest for cache-busting.
///
/// Stable for a given input; 32 hex chars (128 bits) of blake3 output.
#[inline]
pub fn revision<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    let mut hex = digest(data);
    hex.truncate(DIGEST_LEN);
    hex
}
