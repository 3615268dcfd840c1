use thiserror::Error;

/// Errors emitted while loading transactions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}' in csv header")]
    MissingColumn(String),
    #[error("input file must be .csv or .txt: {0}")]
    UnsupportedFormat(String),
}
