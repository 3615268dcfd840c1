use genbasis_core::Itemset;

use crate::closure::ClosedItemset;
use crate::counting::ItemsetCounts;

/// Minimal generators of one closed itemset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorEntry {
    pub closed: Itemset,
    pub generators: Vec<Itemset>,
}

/// Minimal generators per closed itemset, in closed-itemset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorTable {
    entries: Vec<GeneratorEntry>,
}

impl GeneratorTable {
    pub fn from_entries(entries: Vec<GeneratorEntry>) -> Self {
        Self { entries }
    }

    /// Generators recorded for `closed`, if it has an entry.
    pub fn get(&self, closed: &Itemset) -> Option<&[Itemset]> {
        self.entries
            .iter()
            .find(|entry| &entry.closed == closed)
            .map(|entry| entry.generators.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratorEntry> {
        self.entries.iter()
    }

    /// Number of closed itemsets in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of generators across every entry.
    pub fn generator_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.generators.len()).sum()
    }
}

impl<'a> IntoIterator for &'a GeneratorTable {
    type Item = &'a GeneratorEntry;
    type IntoIter = std::slice::Iter<'a, GeneratorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Find the minimal generators of every closed itemset.
///
/// A proper non-empty subset `G` of a closed itemset with support `s` is a
/// candidate when `(count(G) - s) / num_transactions <= epsilon`; with
/// `epsilon == 0` that means `G` has exactly the support of its closure.
/// Candidates that contain another candidate are dropped. Singleton closed
/// itemsets always end up with an empty list.
pub fn find_generators(
    closed: &[ClosedItemset],
    counts: &ItemsetCounts,
    num_transactions: usize,
    epsilon: f64,
) -> GeneratorTable {
    let entries = closed
        .iter()
        .map(|closed| {
            let candidates: Vec<Itemset> = closed
                .itemset
                .proper_subsets()
                .into_iter()
                .filter(|subset| {
                    within_tolerance(counts.count(subset), closed.support, num_transactions, epsilon)
                })
                .collect();

            let generators = candidates
                .iter()
                .filter(|candidate| {
                    !candidates
                        .iter()
                        .any(|other| other.is_proper_subset(candidate))
                })
                .cloned()
                .collect();

            GeneratorEntry {
                closed: closed.itemset.clone(),
                generators,
            }
        })
        .collect();

    GeneratorTable { entries }
}

fn within_tolerance(count: u64, support: u64, num_transactions: usize, epsilon: f64) -> bool {
    if num_transactions == 0 {
        return false;
    }
    (count as f64 - support as f64) / num_transactions as f64 <= epsilon
}
