/// Errors surfaced by the transport seam.
///
/// Every failure is terminal for that attempt: the console performs no
/// automatic retries, and a failed call leaves no local state change.
///
/// # Examples
///
/// ```rust
/// use argus_api::error::ApiError;
///
/// let err = ApiError::NotFound {
///     entity: "strategy_template",
///     id: 99,
/// };
/// assert!(err.to_string().contains("strategy_template"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested entity does not exist server-side (HTTP 404),
    /// e.g. editing a record that was deleted by someone else.
    #[error("Api: {entity} not found (id={id})")]
    NotFound { entity: &'static str, id: i64 },

    /// The server rejected the request with a non-2xx status.
    #[error("Api: server returned {code}: {message}")]
    Status { code: u16, message: String },

    /// A network-level failure (connect, timeout, TLS, ...).
    #[error("Api: transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected shape.
    #[error("Api: JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience `Result` alias for transport operations.
pub type Result<T> = std::result::Result<T, ApiError>;
