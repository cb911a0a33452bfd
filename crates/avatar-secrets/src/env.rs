//! Environment variable backed secrets

use async_trait::async_trait;

use crate::error::{Result, SecretError};
use crate::SecretAccessor;

/// Reads secrets from process environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl EnvSecrets {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretAccessor for EnvSecrets {
    async fn get(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(SecretError::EmptyKey);
        }

        std::env::var(key).map_err(|_| SecretError::Unset(key.to_string()))
    }
}
