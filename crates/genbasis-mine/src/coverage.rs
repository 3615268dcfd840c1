use genbasis_core::{Itemset, Rule, TransactionDataset};

/// Indices of the transactions that contain every item of at least one rule.
pub fn covered_transactions(rules: &[Rule], dataset: &TransactionDataset) -> Vec<usize> {
    let rule_items: Vec<Itemset> = rules.iter().map(Rule::items).collect();

    dataset
        .iter()
        .enumerate()
        .filter(|(_, transaction)| rule_items.iter().any(|items| items.is_subset(transaction)))
        .map(|(idx, _)| idx)
        .collect()
}

/// Fraction of transactions covered by `rules`; 0 for an empty dataset.
pub fn coverage(rules: &[Rule], dataset: &TransactionDataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    covered_transactions(rules, dataset).len() as f64 / dataset.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(generator: &[&str], consequent: &[&str]) -> Rule {
        Rule {
            generator: Itemset::new(generator.iter().copied()),
            consequent: Itemset::new(consequent.iter().copied()),
            support: 0.5,
            confidence: 1.0,
        }
    }

    #[test]
    fn counts_transactions_holding_a_full_rule() {
        let dataset = TransactionDataset::from_baskets(vec![
            vec!["a", "b"],
            vec!["a", "b", "c"],
            vec!["a", "c"],
            vec!["c"],
        ]);
        let rules = vec![rule(&["b"], &["a"])];

        assert_eq!(covered_transactions(&rules, &dataset), vec![0, 1]);
        assert_eq!(coverage(&rules, &dataset), 0.5);
    }

    #[test]
    fn any_rule_is_enough() {
        let dataset = TransactionDataset::from_baskets(vec![vec!["a", "b"], vec!["c", "d"]]);
        let rules = vec![rule(&["b"], &["a"]), rule(&["c"], &["d"])];
        assert_eq!(coverage(&rules, &dataset), 1.0);
    }

    #[test]
    fn empty_inputs() {
        let dataset = TransactionDataset::from_baskets(vec![vec!["a"]]);
        assert_eq!(coverage(&[], &dataset), 0.0);
        assert_eq!(coverage(&[rule(&["a"], &["b"])], &TransactionDataset::default()), 0.0);
    }
}
