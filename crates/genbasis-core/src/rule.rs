use std::fmt;

use serde::{Deserialize, Serialize};

use crate::itemset::Itemset;

/// Association rule `generator => consequent`.
///
/// `support` is relative to the number of transactions and `confidence` is
/// the closed itemset support divided by the generator count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub generator: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
}

impl Rule {
    /// Every item mentioned by the rule (generator and consequent).
    pub fn items(&self) -> Itemset {
        self.generator.union(&self.consequent)
    }

    /// True when `other` swaps generator and consequent of `self`.
    pub fn is_mirror_of(&self, other: &Rule) -> bool {
        self.generator == other.consequent && self.consequent == other.generator
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {}, support={:.4}, confidence={:.2}",
            self.generator, self.consequent, self.support, self.confidence
        )
    }
}
