//! Core contracts for genbasis.
//!
//! This crate defines the itemset, transaction and rule types shared by the
//! loaders, the mining pipeline and the CLI, together with the mining
//! parameters and their validation.

pub mod dataset;
pub mod error;
pub mod itemset;
pub mod params;
pub mod rule;
pub mod validation;

pub use dataset::{Transaction, TransactionDataset};
pub use error::{Error, Result};
pub use itemset::{Item, Itemset};
pub use params::{MiningParams, params_json_schema, parse_params, validate_params_json};
pub use rule::Rule;
pub use validation::{IssueSeverity, ValidationIssue, ValidationReport};
