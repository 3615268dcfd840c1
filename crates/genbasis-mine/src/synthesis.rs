use std::collections::HashMap;

use genbasis_core::{Itemset, Rule};
use tracing::warn;

use crate::closure::ClosedItemset;
use crate::counting::ItemsetCounts;
use crate::generators::GeneratorTable;

/// Turn every (generator, closed itemset) pair into a candidate rule.
///
/// Rules follow the order of `generators` and, within an entry, the order of
/// its generators. The consequent is the closed itemset minus the generator;
/// pairs with an empty consequent are skipped. A generator that was never
/// counted yields confidence 0.
pub fn synthesize_rules(
    generators: &GeneratorTable,
    closed: &[ClosedItemset],
    counts: &ItemsetCounts,
    num_transactions: usize,
) -> Vec<Rule> {
    let support_lookup: HashMap<&Itemset, u64> = closed
        .iter()
        .map(|closed| (&closed.itemset, closed.support))
        .collect();

    let mut rules = Vec::new();
    for entry in generators {
        let Some(&closed_support) = support_lookup.get(&entry.closed) else {
            warn!(closed = %entry.closed, "generator entry without closed itemset skipped");
            continue;
        };

        for generator in &entry.generators {
            let consequent = entry.closed.difference(generator);
            if consequent.is_empty() {
                continue;
            }

            let generator_count = counts.count(generator);
            let confidence = if generator_count > 0 {
                closed_support as f64 / generator_count as f64
            } else {
                0.0
            };

            rules.push(Rule {
                generator: generator.clone(),
                consequent,
                support: relative_support(closed_support, num_transactions),
                confidence,
            });
        }
    }
    rules
}

fn relative_support(count: u64, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        0.0
    } else {
        count as f64 / num_transactions as f64
    }
}
