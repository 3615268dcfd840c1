use genbasis_core::Itemset;

use crate::counting::ItemsetCounts;

/// Frequent itemset with no frequent proper superset of the same support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedItemset {
    pub itemset: Itemset,
    pub support: u64,
}

/// Keep the itemsets counted at least `min_support` times, then the closed ones.
///
/// Closure is judged only against the frequent population, so the result
/// depends on `min_support`. Output follows the iteration order of `counts`.
pub fn find_closed(counts: &ItemsetCounts, min_support: u64) -> Vec<ClosedItemset> {
    let frequent: Vec<(&Itemset, u64)> = counts
        .iter()
        .filter(|&(_, count)| count >= min_support)
        .collect();

    let mut closed = Vec::new();
    for &(itemset, support) in &frequent {
        let absorbed = frequent.iter().any(|&(other, other_support)| {
            other_support == support && itemset.is_proper_subset(other)
        });
        if !absorbed {
            closed.push(ClosedItemset {
                itemset: itemset.clone(),
                support,
            });
        }
    }
    closed
}
