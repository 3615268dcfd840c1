use thiserror::Error;

/// Errors emitted by the mining engine.
#[derive(Debug, Error)]
pub enum MineError {
    #[error(transparent)]
    Params(#[from] genbasis_core::Error),
}
