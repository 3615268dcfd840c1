//! Generic-basis association rule mining.
//!
//! The pipeline counts every itemset, keeps the closed frequent ones, finds
//! their minimal generators, turns each (generator, closed itemset) pair into
//! a rule, drops redundant rules and measures how much of the dataset the
//! surviving rules cover. Every stage is a plain function over the previous
//! stage's output; [`MiningEngine`] chains them.

pub mod closure;
pub mod counting;
pub mod coverage;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod redundancy;
pub mod synthesis;

pub use closure::{ClosedItemset, find_closed};
pub use counting::{CountingStrategy, ItemsetCounts, PowerSetCounter, count_itemsets};
pub use coverage::{coverage, covered_transactions};
pub use engine::{MiningEngine, MiningOutcome};
pub use errors::MineError;
pub use generators::{GeneratorEntry, GeneratorTable, find_generators};
pub use redundancy::{filter_rules, remove_redundant, threshold_rules};
pub use synthesis::synthesize_rules;
