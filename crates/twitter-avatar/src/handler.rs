//! `/twitter` redirect endpoint

use std::sync::Arc;

use avatar_secrets::SecretAccessor;
use axum::{
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{debug, info, warn};

use crate::cache::ProfileImageCache;
use crate::error::Result;
use crate::resolver::ProfileImageResolver;
use crate::size::ImageSize;
use crate::{BEARER_TOKEN_KEY, DEFAULT_IMAGE_URL};

pub const MISSING_USERNAME: &str = "You must specify username query parameter.";

/// Everything a `/twitter` request needs, shared across requests
pub struct TwitterState {
    token: String,
    resolver: ProfileImageResolver,
    cache: ProfileImageCache,
}

pub type SharedTwitterState = Arc<TwitterState>;

impl TwitterState {
    pub fn new(token: String, resolver: ProfileImageResolver, cache: ProfileImageCache) -> Self {
        Self {
            token,
            resolver,
            cache,
        }
    }

    /// Load the bearer token once and build state with an empty cache
    pub async fn from_secrets(
        secrets: &dyn SecretAccessor,
        resolver: ProfileImageResolver,
    ) -> Result<Self> {
        let token = secrets.get(BEARER_TOKEN_KEY).await?;
        Ok(Self::new(token, resolver, ProfileImageCache::new()))
    }

    pub fn cache(&self) -> &ProfileImageCache {
        &self.cache
    }

    /// Base image URL for a normalized handle, and whether it came from the cache
    pub async fn base_image_url(&self, handle: &str) -> (String, bool) {
        if let Some(url) = self.cache.get(handle).await {
            debug!(handle = %handle, url = %url, "Cache hit");
            return (url, true);
        }

        let url = self.resolver.resolve(handle, &self.token).await;
        info!(handle = %handle, url = %url, "Resolved profile image");

        self.cache.put(handle, &url).await;
        (url, false)
    }
}

/// Create the `/twitter` router
pub fn router(state: SharedTwitterState) -> Router {
    Router::new()
        .route("/twitter", get(twitter_avatar))
        .with_state(state)
}

/// First value of a query parameter; later repeats are ignored
pub fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Trim and lower-case a handle; blank handles are rejected
pub fn normalize_handle(raw: &str) -> Option<String> {
    let handle = raw.trim().to_lowercase();
    (!handle.is_empty()).then_some(handle)
}

async fn twitter_avatar(
    State(state): State<SharedTwitterState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let Some(handle) = first_param(&params, "username").and_then(normalize_handle) else {
        debug!("No username given");
        return (StatusCode::BAD_REQUEST, MISSING_USERNAME).into_response();
    };

    let size = ImageSize::from_token(first_param(&params, "size").unwrap_or_default());

    let (base_url, from_cache) = state.base_image_url(&handle).await;
    let location = size.apply(&base_url);

    found(&location, from_cache)
}

fn found(location: &str, from_cache: bool) -> Response {
    let location = HeaderValue::from_str(location).unwrap_or_else(|_| {
        warn!(location = %location, "Image URL is not a valid header value, using default");
        HeaderValue::from_static(DEFAULT_IMAGE_URL)
    });
    let cache_header = if from_cache { "HIT" } else { "MISS" };

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (
                HeaderName::from_static("x-cache"),
                HeaderValue::from_static(cache_header),
            ),
        ],
    )
        .into_response()
}
