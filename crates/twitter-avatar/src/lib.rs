//! Twitter avatar resolution
//!
//! Resolves a Twitter handle to its profile image URL through the
//! `users/show` API, keeps the answer in a bounded LRU cache, and redirects
//! callers to the requested size variant. Upstream failures never reach the
//! caller: they resolve to the default profile image instead.

mod cache;
mod error;
mod handler;
mod resolver;
mod size;
mod types;

#[cfg(test)]
mod test_support;

pub use cache::{ProfileImageCache, CACHE_CAPACITY};
pub use error::{Result, TwitterError};
pub use handler::{
    first_param, normalize_handle, router, SharedTwitterState, TwitterState, MISSING_USERNAME,
};
pub use resolver::{ProfileImageResolver, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use size::ImageSize;
pub use types::{CacheStats, UserProfile};

/// Image served when a profile image cannot be resolved
pub const DEFAULT_IMAGE_URL: &str =
    "https://abs.twimg.com/sticky/default_profile_images/default_profile_normal.png";

/// Secret key holding the API bearer token
pub const BEARER_TOKEN_KEY: &str = "TWITTER_BEARER_TOKEN";
