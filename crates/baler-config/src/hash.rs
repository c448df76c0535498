//! Content hashing for cache-busting output filenames.

/// Hex characters of the truncated digest embedded in filenames.
const HASH_LEN: usize = 16;

/// Digest of a file's contents, truncated for filename use.
///
/// Identical content always produces an identical token, so output names are
/// reproducible across builds.
pub fn content_hash(content: &[u8]) -> String {
    let digest = blake3::hash(content);
    let mut hex = digest.to_hex().to_string();
    hex.truncate(HASH_LEN);
    hex
}

/// Expand `[name]` and `[contenthash]` placeholders in a filename template.
///
/// # Example
///
/// ```
/// use baler_config::hash::{content_hash, expand_filename};
///
/// let hash = content_hash(b"console.log('hi')");
/// let filename = expand_filename("[name].[contenthash].js", "main", &hash);
/// assert!(filename.starts_with("main."));
/// assert!(filename.ends_with(".js"));
/// ```
pub fn expand_filename(template: &str, name: &str, hash: &str) -> String {
    template
        .replace("[name]", name)
        .replace("[contenthash]", hash)
}
