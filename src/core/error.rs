use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// An upstream fetch that reaches the server but comes back non-2xx maps to
/// [`DashError::Status`]; a transport-level failure maps to [`DashError::Http`].
/// A fetch that succeeds but yields zero usable items is *not* an error: those
/// calls return empty collections or all-`None` models instead.
#[derive(Debug, Error)]
pub enum DashError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from an upstream source was in an unexpected format
    /// or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    MissingData(String),

    /// An invalid date range was provided for a historical data request
    /// (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// The durable sentiment store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] std::io::Error),
}
