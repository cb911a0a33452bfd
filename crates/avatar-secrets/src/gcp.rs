//! GCP Secret Manager backed secrets
//!
//! Talks to the Secret Manager REST API using an access token obtained from
//! the GCE/Cloud Run metadata server.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SecretError};
use crate::SecretAccessor;

const DEFAULT_METADATA_URL: &str = "http://metadata.google.internal";
const DEFAULT_API_URL: &str = "https://secretmanager.googleapis.com";
const LATEST_VERSION: &str = "latest";

#[derive(Debug, Deserialize)]
struct AccessToken {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct AccessSecretVersionResponse {
    payload: SecretPayload,
}

#[derive(Debug, Deserialize)]
struct SecretPayload {
    data: String,
}

/// Reads secrets from GCP Secret Manager for a single project
pub struct GcpSecretManager {
    client: Client,
    project_id: String,
    metadata_url: String,
    api_url: String,
}

impl GcpSecretManager {
    /// Create an accessor for the given project using the default endpoints
    pub fn new(project_id: &str) -> Result<Self> {
        Self::with_endpoints(project_id, DEFAULT_METADATA_URL, DEFAULT_API_URL)
    }

    /// Create an accessor with custom metadata server and API endpoints
    pub fn with_endpoints(project_id: &str, metadata_url: &str, api_url: &str) -> Result<Self> {
        if project_id.is_empty() {
            return Err(SecretError::EmptyProjectId);
        }

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            client,
            project_id: project_id.to_string(),
            metadata_url: metadata_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Access a specific version of a secret (`latest` when empty)
    pub async fn get_version(&self, name: &str, version: &str) -> Result<String> {
        if name.is_empty() {
            return Err(SecretError::EmptyKey);
        }
        let version = if version.is_empty() {
            LATEST_VERSION
        } else {
            version
        };

        let token = self.access_token().await?;

        let url = format!(
            "{}/v1/projects/{}/secrets/{}/versions/{}:access",
            self.api_url, self.project_id, name, version
        );
        debug!(secret = name, version, "Accessing secret version");

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(SecretError::Api(format!(
                "failed to access secret version {name}/{version}: status {}",
                response.status()
            )));
        }

        let body: AccessSecretVersionResponse = response.json().await?;
        decode_payload(&body.payload.data)
    }

    async fn access_token(&self) -> Result<String> {
        let url = format!(
            "{}/computeMetadata/v1/instance/service-accounts/default/token",
            self.metadata_url
        );

        let response = self
            .client
            .get(&url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SecretError::Api(format!(
                "metadata server returned status {}",
                response.status()
            )));
        }

        let token: AccessToken = response.json().await?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SecretAccessor for GcpSecretManager {
    async fn get(&self, key: &str) -> Result<String> {
        self.get_version(key, LATEST_VERSION).await
    }
}

fn decode_payload(data: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| SecretError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SecretError::Decode(e.to_string()))
}
