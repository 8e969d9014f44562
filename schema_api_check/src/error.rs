use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// The backend could not be reached at all (refused, unreachable).
    /// Rendered as the two-line connection hint instead of a generic error.
    #[error("could not connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;
