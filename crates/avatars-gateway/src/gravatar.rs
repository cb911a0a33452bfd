//! `/gravatar` redirect endpoint
//!
//! Stateless: the avatar URL is a hash of the normalized email.

use axum::{
    extract::Query,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use md5::{Digest, Md5};
use tracing::{debug, info};
use twitter_avatar::first_param;

const GRAVATAR_URL: &str = "https://www.gravatar.com/avatar";
const DEFAULT_SIZE: u16 = 80;
const MAX_SIZE: u16 = 2048;

pub const MISSING_EMAIL: &str = "You must specify email query parameter.";

/// Hex MD5 of the trimmed, lower-cased email
pub fn email_hash(email: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}

/// Requested pixel size; `size` wins over `s`, anything outside 1..=2048 is the default
fn requested_size(size: Option<&str>, s: Option<&str>) -> u16 {
    size.filter(|v| !v.is_empty())
        .or(s)
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|v| (1..=MAX_SIZE).contains(v))
        .unwrap_or(DEFAULT_SIZE)
}

/// Repeated keys resolve to their first value
pub async fn gravatar(Query(params): Query<Vec<(String, String)>>) -> Response {
    let email = first_param(&params, "email").unwrap_or_default().trim();
    if email.is_empty() {
        debug!("No email given");
        return (StatusCode::BAD_REQUEST, MISSING_EMAIL).into_response();
    }

    let size = requested_size(first_param(&params, "size"), first_param(&params, "s"));
    let image_url = format!("{}/{}?s={}", GRAVATAR_URL, email_hash(email), size);

    info!(image_url = %image_url, size, "Computed Gravatar URL");

    match HeaderValue::from_str(&image_url) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
