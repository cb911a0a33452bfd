//! Error types for the avatars gateway

use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    Config(String),
    Secret(avatar_secrets::SecretError),
    Twitter(twitter_avatar::TwitterError),
    Io(Box<std::io::Error>),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GatewayError::Secret(err) => write!(f, "Secret accessor error: {}", err),
            GatewayError::Twitter(err) => write!(f, "{}", err),
            GatewayError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Secret(err) => Some(err),
            GatewayError::Twitter(err) => Some(err),
            GatewayError::Io(err) => Some(err.as_ref()),
            GatewayError::Config(_) => None,
        }
    }
}

impl From<avatar_secrets::SecretError> for GatewayError {
    fn from(err: avatar_secrets::SecretError) -> Self {
        GatewayError::Secret(err)
    }
}

impl From<twitter_avatar::TwitterError> for GatewayError {
    fn from(err: twitter_avatar::TwitterError) -> Self {
        GatewayError::Twitter(err)
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for GatewayError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        GatewayError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
