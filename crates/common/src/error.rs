use thiserror::Error;

/// Failure of a single fetch. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request timeout")]
    Timeout,

    #[error(
        "Unable to connect to the server. Please check your internet connection or try again later."
    )]
    NetworkUnreachable,

    #[error("{0}")]
    InvalidResponse(InvalidResponse),

    #[error("Invalid number type: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidResponse {
    #[error("Network response was not ok (status {0})")]
    Status(u16),

    #[error("Invalid response format")]
    Format,
}

impl From<InvalidResponse> for FetchError {
    fn from(e: InvalidResponse) -> Self {
        Self::InvalidResponse(e)
    }
}
