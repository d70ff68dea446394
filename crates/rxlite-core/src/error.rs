use thiserror::Error;

/// Canonical result for the pipeline crates.
pub type Result<T> = std::result::Result<T, StreamError>;

/// The single error currency of the pipeline.
///
/// Faults never escape `subscribe` as a raised error; they are routed to the
/// observer's `error` callback. These variants only classify where a fault
/// originated so handlers and logs can tell producers from operators.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("source error: {0}")]
    Source(String),

    #[error("transform error: {0}")]
    Transform(String),

    #[error("predicate error: {0}")]
    Predicate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(e: serde_json::Error) -> Self {
        StreamError::Decode(e.to_string())
    }
}
