//! Profile image lookups against the Twitter API

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{Result, TwitterError};
use crate::types::UserProfile;
use crate::DEFAULT_IMAGE_URL;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the `users/show` endpoint
pub struct ProfileImageResolver {
    client: Client,
    api_url: String,
}

impl ProfileImageResolver {
    /// Create a resolver against the public Twitter API
    pub fn new() -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }

    /// Create a resolver with a custom API base URL and request timeout
    pub fn with_api_url(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a handle to its base profile image URL.
    ///
    /// Makes exactly one request. Any failure, or a profile without an image,
    /// yields [`DEFAULT_IMAGE_URL`].
    pub async fn resolve(&self, handle: &str, token: &str) -> String {
        match self.fetch_image_url(handle, token).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(handle = %handle, "Profile has no image URL, using default");
                DEFAULT_IMAGE_URL.to_string()
            }
            Err(e) => {
                warn!(handle = %handle, error = %e, "Failed to resolve profile image, using default");
                DEFAULT_IMAGE_URL.to_string()
            }
        }
    }

    async fn fetch_image_url(&self, handle: &str, token: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/1.1/users/show.json?screen_name={}",
            self.api_url,
            urlencoding::encode(handle)
        );

        debug!(url = %url, "Fetching user profile");

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(TwitterError::UpstreamStatus(response.status().as_u16()));
        }

        let profile: UserProfile = response.json().await?;
        Ok(profile.image_url())
    }
}
