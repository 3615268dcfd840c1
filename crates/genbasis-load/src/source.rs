use genbasis_core::TransactionDataset;

use crate::errors::LoadError;

/// Trait implemented by anything that can produce a transaction dataset.
pub trait TransactionSource {
    /// Returns the format identifier (e.g. `csv`).
    fn format(&self) -> &'static str;

    /// Read the source and return its transactions.
    fn load(&self) -> Result<TransactionDataset, LoadError>;
}
