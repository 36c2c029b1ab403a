use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {message}")]
    TomlParse { message: String },
}

/// Coarse classification used by callers that need to tell failures apart
/// without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Api,
    Network,
    Decode,
}

impl ServiceError {
    pub fn config(message: impl Into<String>) -> Self {
        ServiceError::Config {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Config { .. }
            | ServiceError::InvalidConfigValue { .. }
            | ServiceError::Io(_)
            | ServiceError::TomlParse { .. } => ErrorKind::Configuration,
            ServiceError::Api { .. } => ErrorKind::Api,
            ServiceError::Network(_) => ErrorKind::Network,
            ServiceError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// HTTP status of an API error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
