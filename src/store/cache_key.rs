use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Characters that are not allowed in a file name on at least one of the
/// platforms we run on.
const ILLEGAL_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// How an article identifier is turned into a cache file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheNaming {
    /// Replace every illegal character with `_`. Distinct identifiers can
    /// collide.
    #[default]
    Sanitized,
    /// Hex SHA-256 of the identifier.
    Hashed,
}

impl CacheNaming {
    pub fn key(self, id: &str) -> String {
        match self {
            CacheNaming::Sanitized => sanitize(id),
            CacheNaming::Hashed => hashed(id),
        }
    }
}

/// Replace every character that is illegal in a file name with `_`.
pub fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_control() || ILLEGAL_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

fn hashed(id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    hex::encode(hasher.finalize())
}
