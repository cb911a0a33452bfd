//! Error types for secret access

use std::fmt;

#[derive(Debug)]
pub enum SecretError {
    EmptyKey,
    Unset(String),
    EmptyProjectId,
    Http(reqwest::Error),
    Api(String),
    Decode(String),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "please provide a secret key"),
            Self::Unset(key) => write!(f, "provided key {key} is unset"),
            Self::EmptyProjectId => write!(f, "project ID must not be empty"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Api(msg) => write!(f, "Secret Manager error: {msg}"),
            Self::Decode(msg) => write!(f, "could not decode secret payload: {msg}"),
        }
    }
}

impl std::error::Error for SecretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SecretError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, SecretError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_display() {
        assert_eq!(
            SecretError::EmptyKey.to_string(),
            "please provide a secret key"
        );
    }

    #[test]
    fn test_unset_display() {
        let err = SecretError::Unset("UNSET_KEY".to_string());
        assert_eq!(err.to_string(), "provided key UNSET_KEY is unset");
    }

    #[test]
    fn test_api_error_has_no_source() {
        use std::error::Error;

        let err = SecretError::Api("status 404".to_string());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("status 404"));
    }
}
