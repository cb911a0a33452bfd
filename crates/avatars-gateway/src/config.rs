//! Gateway configuration from environment variables

use std::time::Duration;

use crate::error::{GatewayError, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PUBLIC_URL: &str = "https://avatars.charlyx.dev";

/// Where the bearer token is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretsBackend {
    Env,
    Gcp,
}

/// Gateway configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub project_id: Option<String>,
    pub secrets_backend: SecretsBackend,
    pub twitter_api_url: String,
    pub twitter_timeout: Duration,
    pub public_url: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let project_id = lookup("PROJECT_ID").filter(|p| !p.is_empty());

        let secrets_backend = match lookup("SECRETS_BACKEND").as_deref() {
            Some("env") => SecretsBackend::Env,
            Some("gcp") => SecretsBackend::Gcp,
            Some(other) if !other.is_empty() => {
                return Err(GatewayError::Config(format!(
                    "unknown secrets backend: {other}"
                )))
            }
            _ if project_id.is_some() => SecretsBackend::Gcp,
            _ => SecretsBackend::Env,
        };

        let twitter_api_url = lookup("TWITTER_API_URL")
            .unwrap_or_else(|| twitter_avatar::DEFAULT_API_URL.to_string());
        url::Url::parse(&twitter_api_url).map_err(|e| {
            GatewayError::Config(format!("invalid TWITTER_API_URL {twitter_api_url}: {e}"))
        })?;

        let twitter_timeout = lookup("TWITTER_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(twitter_avatar::DEFAULT_TIMEOUT);

        let public_url = lookup("PUBLIC_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());

        Ok(Self {
            port,
            project_id,
            secrets_backend,
            twitter_api_url,
            twitter_timeout,
            public_url,
        })
    }
}
