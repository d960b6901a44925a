/// Errors produced by the remote API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status. The message is taken
    /// from the response body when the server provides one.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Transport or body-decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The configured base URL could not be parsed.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Status code of the server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
