use thiserror::Error;

pub type Result<T> = std::result::Result<T, CacheError>;

/// Cache interceptor errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// The network fetch failed before a response was available
    #[error("network: {0}")]
    Network(String),
    /// The request/response pair cannot be stored
    #[error("not storable: {0}")]
    Unstorable(String),
}
