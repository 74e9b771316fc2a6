//! Error types for backend requests.

use thiserror::Error;

/// Errors that can occur when calling the application backend.
///
/// Failures are propagated to the caller unchanged; the SDK performs no
/// retry or recovery. Transport failures and backend-reported error
/// responses are distinct variants but receive identical treatment:
/// logged once, then returned.
///
/// # Example
///
/// ```rust
/// use paygate::RequestError;
///
/// let error = RequestError::Response {
///     status: 502,
///     message: "upstream unavailable".to_string(),
/// };
/// assert!(error.to_string().contains("502"));
/// ```
#[derive(Debug, Error)]
pub enum RequestError {
    /// A transport-level failure (connection refused, DNS, TLS, the
    /// client's own timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend replied with a non-success HTTP status.
    #[error("Backend responded with status {status}: {message}")]
    Response {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        message: String,
    },

    /// The backend replied with a success status but an unparsable body.
    #[error("Failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),
}

// Verify RequestError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestError>();
};
