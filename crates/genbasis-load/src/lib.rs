//! Transaction loaders.
//!
//! Turn raw basket files into a [`TransactionDataset`] ready for mining.

pub mod csv;
pub mod errors;
pub mod options;
pub mod source;
pub mod txt;

use std::path::Path;

pub use crate::csv::CsvSource;
pub use errors::LoadError;
pub use options::CsvLayout;
pub use source::TransactionSource;
pub use txt::TxtSource;

pub use genbasis_core::TransactionDataset;

/// Pick a source for `path` based on its extension.
pub fn source_for_path(path: &Path) -> Result<Box<dyn TransactionSource>, LoadError> {
    source_with_layout(path, CsvLayout::default())
}

/// Like [`source_for_path`], reading `.csv` files with `layout`.
pub fn source_with_layout(
    path: &Path,
    layout: CsvLayout,
) -> Result<Box<dyn TransactionSource>, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(Box::new(CsvSource::new(path, layout))),
        Some("txt") => Ok(Box::new(TxtSource::new(path))),
        _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Load transactions from a `.csv` or `.txt` file.
pub fn load_transactions(path: &Path) -> Result<TransactionDataset, LoadError> {
    source_for_path(path)?.load()
}
