use pokedex_client::FetchError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The requested entry does not exist on the provider
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider request or decoding failed
    #[error("Request failed: {0}")]
    Fetch(FetchError),

    /// Rejected command input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Process exit status for this error.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => 2,
            _ => 1,
        }
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotFound { resource } => Self::NotFound(resource),
            FetchError::InvalidRequest(msg) => Self::InvalidInput(msg),
            FetchError::Config(msg) => Self::Config(msg),
            other => Self::Fetch(other),
        }
    }
}
