use thiserror::Error;

/// Failure of a single fetch against the page store.
///
/// An empty result is not an error. The core never retries; callers decide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Network failure, timeout, or the store answering with a server error.
    #[error("store unreachable: {0}")]
    Transport(String),

    /// The store rejected the request (e.g. a malformed filter value).
    #[error("query rejected ({status}): {message}")]
    Query { status: u16, message: String },

    /// The store answered with a body that does not have the expected shape.
    #[error("unexpected store response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn query(status: u16, msg: impl Into<String>) -> Self {
        Self::Query {
            status,
            message: msg.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
