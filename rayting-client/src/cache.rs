//! Location of the local state file.
//!
//! Each backend gets its own file so switching `--api-url` never mixes two
//! catalogs in one cache.

use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Returns `~/.cache/rayting/`.
pub fn cache_dir() -> PathBuf {
    let cache = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache.join("rayting")
}

/// SHA-256 of the normalized API URL, truncated to 16 hex chars.
pub fn cache_key(api_url: &str) -> String {
    let normalized = api_url.trim().trim_end_matches('/').to_lowercase();
    let hash = Sha256::digest(normalized.as_bytes());
    hex_encode(&hash[..8])
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// State file (query state and item cache) for a backend.
pub fn state_path(api_url: &str) -> PathBuf {
    cache_dir().join(format!("{}.json", cache_key(api_url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_trailing_slash_and_case() {
        assert_eq!(
            cache_key("http://localhost:5001/api"),
            cache_key("HTTP://localhost:5001/api/")
        );
        assert_ne!(
            cache_key("http://localhost:5001/api"),
            cache_key("https://example.org/api")
        );
        assert_eq!(cache_key("x").len(), 16);
    }

    #[test]
    fn state_file_lives_in_cache_dir() {
        let path = state_path("http://localhost:5001/api");
        assert!(path.starts_with(cache_dir()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
