use serde::{Deserialize, Serialize};

use crate::itemset::{Item, Itemset};

/// One observed basket. Duplicate items collapse on construction.
pub type Transaction = Itemset;

/// Ordered sequence of transactions.
///
/// Order does not affect counting, only the index of each transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDataset {
    transactions: Vec<Transaction>,
}

impl TransactionDataset {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Build a dataset from raw baskets, collapsing duplicate items per basket.
    pub fn from_baskets<B, I, S>(baskets: B) -> Self
    where
        B: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        baskets.into_iter().map(Itemset::new).collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Distinct items across every transaction.
    pub fn item_universe(&self) -> Itemset {
        self.transactions
            .iter()
            .flat_map(|transaction| transaction.iter().cloned())
            .collect()
    }
}

impl FromIterator<Transaction> for TransactionDataset {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransactionDataset {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baskets_collapse_duplicates() {
        let dataset = TransactionDataset::from_baskets(vec![
            vec!["bread", "milk"],
            vec!["bread", "milk", "butter", "butter"],
        ]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.transactions()[1].len(), 3);
        assert_eq!(
            dataset.item_universe(),
            Itemset::new(["bread", "butter", "milk"])
        );
    }

    #[test]
    fn empty_dataset() {
        let dataset = TransactionDataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.item_universe().is_empty());
    }
}
