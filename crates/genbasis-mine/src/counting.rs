use std::collections::HashMap;

use genbasis_core::{Itemset, TransactionDataset};

/// Occurrence count of every itemset seen in a dataset.
///
/// Lookups are hashed; iteration follows the order in which itemsets were
/// first counted, which keeps every downstream stage reproducible. The empty
/// itemset is never stored.
#[derive(Debug, Clone, Default)]
pub struct ItemsetCounts {
    index: HashMap<Itemset, usize>,
    entries: Vec<(Itemset, u64)>,
}

impl ItemsetCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `itemset`.
    pub fn increment(&mut self, itemset: Itemset) {
        if itemset.is_empty() {
            return;
        }

        match self.index.get(&itemset) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(itemset.clone(), self.entries.len());
                self.entries.push((itemset, 1));
            }
        }
    }

    pub fn get(&self, itemset: &Itemset) -> Option<u64> {
        self.index.get(itemset).map(|&idx| self.entries[idx].1)
    }

    /// Count of `itemset`, zero when it never occurred.
    pub fn count(&self, itemset: &Itemset) -> u64 {
        self.get(itemset).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u64)> + '_ {
        self.entries.iter().map(|(itemset, count)| (itemset, *count))
    }
}

/// Strategy that produces exact counts for every itemset of a dataset.
pub trait CountingStrategy {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    fn count(&self, dataset: &TransactionDataset) -> ItemsetCounts;
}

/// Enumerates the full power set of each transaction.
///
/// Cost is exponential in transaction length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerSetCounter;

impl CountingStrategy for PowerSetCounter {
    fn name(&self) -> &'static str {
        "power_set"
    }

    fn count(&self, dataset: &TransactionDataset) -> ItemsetCounts {
        let mut counts = ItemsetCounts::new();
        for transaction in dataset {
            for subset in transaction.subsets() {
                counts.increment(subset);
            }
        }
        counts
    }
}

/// Count every non-empty subset of every transaction.
pub fn count_itemsets(dataset: &TransactionDataset) -> ItemsetCounts {
    PowerSetCounter.count(dataset)
}
