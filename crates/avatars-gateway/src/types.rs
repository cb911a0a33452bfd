//! Response types for the avatars gateway

use serde::Serialize;
use twitter_avatar::CacheStats;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: CacheStats,
}
