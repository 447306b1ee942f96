use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwitterApiError {
    #[error("api key is not a valid header value")]
    InvalidApiKey,

    #[error("invalid base url: {url}")]
    InvalidBaseUrl { url: String },

    #[error("unable to build http client: {0}")]
    Client(reqwest::Error),

    #[error("unable to send search request: {query}, {error}")]
    Request {
        query: String,
        error: reqwest::Error,
    },

    #[error("search request returned {status}: {query}")]
    Status { query: String, status: StatusCode },

    #[error("unable to parse search response: {query}, {msg}")]
    Decode { query: String, msg: String },
}

impl TwitterApiError {
    /// HTTP status of the failed request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { error, .. } => error.status(),
            _ => None,
        }
    }
}
