//! In-memory secrets for tests and local runs

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Result, SecretError};
use crate::SecretAccessor;

/// Serves secrets from a fixed map
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, returning the updated accessor
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl SecretAccessor for StaticSecrets {
    async fn get(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(SecretError::EmptyKey);
        }

        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| SecretError::Unset(key.to_string()))
    }
}
