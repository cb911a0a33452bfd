//! Secret accessors
//!
//! A single capability, [`SecretAccessor`], that turns a logical key name into
//! a secret value. Production reads from GCP Secret Manager, local runs from
//! environment variables, and tests from an in-memory map.

mod env;
mod error;
mod gcp;
mod memory;

pub use env::EnvSecrets;
pub use error::{Result, SecretError};
pub use gcp::GcpSecretManager;
pub use memory::StaticSecrets;

use async_trait::async_trait;

/// Looks up a secret value by key
#[async_trait]
pub trait SecretAccessor: Send + Sync {
    async fn get(&self, key: &str) -> Result<String>;
}
