//! Core types for Twitter avatar resolution

use serde::{Deserialize, Serialize};

/// The subset of a `users/show` response we care about
#[derive(Debug, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub profile_image_url_https: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl UserProfile {
    /// The profile image URL, preferring the https variant. Empty values count as missing.
    pub fn image_url(self) -> Option<String> {
        [self.profile_image_url_https, self.profile_image_url]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
    }
}

/// Statistics about the resolution cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}
