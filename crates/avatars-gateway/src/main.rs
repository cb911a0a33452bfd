//! Avatars gateway
//!
//! Redirects `/twitter?username=` to the user's Twitter profile image and
//! `/gravatar?email=` to the matching Gravatar image.

mod config;
mod error;
mod gravatar;
mod server;
mod types;
mod usage;

use crate::config::{Config, SecretsBackend};
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use avatar_secrets::{EnvSecrets, GcpSecretManager, SecretAccessor};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use twitter_avatar::{ProfileImageResolver, TwitterState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("avatars_gateway=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting avatars gateway...");

    let config = Config::from_env()?;
    info!("Port: {}", config.port);
    info!("Secrets backend: {:?}", config.secrets_backend);
    info!("Twitter API: {}", config.twitter_api_url);
    info!("Twitter timeout: {:?}", config.twitter_timeout);

    let secrets = secret_accessor(&config)?;
    let resolver =
        ProfileImageResolver::with_api_url(&config.twitter_api_url, config.twitter_timeout)?;
    let twitter = TwitterState::from_secrets(secrets.as_ref(), resolver).await?;

    // Create shared state
    let state: SharedState = Arc::new(ServerState::new(Arc::new(twitter), &config.public_url));

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}

fn secret_accessor(config: &Config) -> Result<Box<dyn SecretAccessor>> {
    match config.secrets_backend {
        SecretsBackend::Env => Ok(Box::new(EnvSecrets::new())),
        SecretsBackend::Gcp => {
            let project_id = config.project_id.as_deref().unwrap_or_default();
            Ok(Box::new(GcpSecretManager::new(project_id)?))
        }
    }
}
