use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use genbasis_core::{Itemset, TransactionDataset};
use tracing::warn;

use crate::errors::LoadError;
use crate::source::TransactionSource;

/// Plain-text baskets: one transaction per line, items split on a delimiter.
#[derive(Debug, Clone)]
pub struct TxtSource {
    path: PathBuf,
    delimiter: char,
}

impl TxtSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: ',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl TransactionSource for TxtSource {
    fn format(&self) -> &'static str {
        "txt"
    }

    fn load(&self) -> Result<TransactionDataset, LoadError> {
        let file = File::open(&self.path)?;
        read_transactions(BufReader::new(file), self.delimiter)
    }
}

/// Parse delimited baskets from any buffered reader.
///
/// Items are trimmed; blank lines and empty items are skipped.
pub fn read_transactions<R: BufRead>(
    reader: R,
    delimiter: char,
) -> Result<TransactionDataset, LoadError> {
    let mut transactions = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let transaction: Itemset = line
            .split(delimiter)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect();

        if transaction.is_empty() {
            warn!(line = line_idx + 1, "skipping blank transaction line");
            continue;
        }
        transactions.push(transaction);
    }

    Ok(TransactionDataset::new(transactions))
}
