use thiserror::Error;

/// Core error type shared across genbasis crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Mining parameters are missing or out of range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    /// The parameter JSON Schema could not be built or compiled.
    #[error("schema error: {0}")]
    Schema(String),
}

/// Convenience alias for results returned by genbasis crates.
pub type Result<T> = std::result::Result<T, Error>;
