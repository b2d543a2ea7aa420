use pokedex_core::PageError;

/// Errors that can occur while fetching or assembling catalog data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The provider has no such entry (HTTP 404), or the id is past the
    /// end of the catalog
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The provider answered with a non-success status
    #[error("request for {resource} failed (HTTP {status})")]
    Status { resource: String, status: u16 },

    /// The request never got a response
    #[error("request for {resource} failed: {source}")]
    Transport {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected document shape
    #[error("malformed response for {resource}: {message}")]
    Malformed { resource: String, message: String },

    /// The caller asked for something outside the valid input range
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FetchError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn malformed(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            resource: resource.into(),
            message: message.into(),
        }
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The provider resource the failure is attributed to, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            Self::NotFound { resource }
            | Self::Status { resource, .. }
            | Self::Transport { resource, .. }
            | Self::Malformed { resource, .. } => Some(resource),
            Self::InvalidRequest(_) | Self::Config(_) => None,
        }
    }
}

impl From<PageError> for FetchError {
    fn from(err: PageError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}
