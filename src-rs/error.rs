use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    NotFound(String),

    #[error("{message}")]
    BadInput { message: String, errors: Vec<String> },

    #[error("registry error: {0}")]
    Registry(String),

    #[error("internal server")]
    Internal(String),
}

impl ActionError {
    pub fn bad_input(message: &str, errors: Vec<String>) -> Self {
        Self::BadInput {
            message: message.to_string(),
            errors,
        }
    }

    pub fn errors(&self) -> Vec<String> {
        match self {
            Self::BadInput { errors, .. } => errors.clone(),
            Self::Internal(detail) if !detail.is_empty() => vec![detail.clone()],
            _ => Vec::new(),
        }
    }
}

/// Failure of a single dispatch. Output fields are left untouched.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("response body was null")]
    NullResponse,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(String),
}
