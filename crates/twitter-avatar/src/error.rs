//! Error types for Twitter avatar resolution

use std::fmt;

use avatar_secrets::SecretError;

#[derive(Debug)]
pub enum TwitterError {
    /// Bearer token could not be loaded
    Secret(SecretError),
    Http(reqwest::Error),
    UpstreamStatus(u16),
}

impl fmt::Display for TwitterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret(e) => write!(f, "could not get twitter token: {e}"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::UpstreamStatus(status) => write!(f, "Twitter API returned status {status}"),
        }
    }
}

impl std::error::Error for TwitterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Secret(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::UpstreamStatus(_) => None,
        }
    }
}

impl From<SecretError> for TwitterError {
    fn from(err: SecretError) -> Self {
        Self::Secret(err)
    }
}

impl From<reqwest::Error> for TwitterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, TwitterError>;
