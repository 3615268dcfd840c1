use genbasis_core::{Itemset, Rule, TransactionDataset};
use genbasis_mine::{
    count_itemsets, filter_rules, find_closed, find_generators, synthesize_rules,
};

fn set(items: &[&str]) -> Itemset {
    Itemset::new(items.iter().copied())
}

fn groceries() -> TransactionDataset {
    TransactionDataset::from_baskets(vec![
        vec!["bread", "milk"],
        vec!["milk", "butter"],
        vec!["bread", "butter"],
        vec!["bread", "milk", "butter"],
    ])
}

fn groceries_with_duplicates() -> TransactionDataset {
    TransactionDataset::from_baskets(vec![
        vec!["bread", "milk"],
        vec!["milk", "butter"],
        vec!["bread", "butter"],
        vec!["butter", "bread"],
        vec!["bread", "milk", "butter", "butter"],
    ])
}

fn with_generators() -> TransactionDataset {
    TransactionDataset::from_baskets(vec![
        vec!["a", "b"],
        vec!["a", "b"],
        vec!["a", "b", "c"],
        vec!["a", "b", "c"],
        vec!["a", "c"],
        vec!["c"],
    ])
}

fn closed_sets(dataset: &TransactionDataset, min_support: u64) -> Vec<Itemset> {
    find_closed(&count_itemsets(dataset), min_support)
        .into_iter()
        .map(|closed| closed.itemset)
        .collect()
}

fn candidate_rules(dataset: &TransactionDataset, min_support: u64) -> Vec<Rule> {
    let counts = count_itemsets(dataset);
    let closed = find_closed(&counts, min_support);
    let generators = find_generators(&closed, &counts, dataset.len(), 0.0);
    synthesize_rules(&generators, &closed, &counts, dataset.len())
}

#[test]
fn every_grocery_itemset_is_closed_at_support_one() {
    let closed = find_closed(&count_itemsets(&groceries()), 1);
    assert_eq!(closed.len(), 7);

    for closed in &closed {
        let expected = match closed.itemset.len() {
            1 => 3,
            2 => 2,
            3 => 1,
            _ => unreachable!("unexpected itemset {}", closed.itemset),
        };
        assert_eq!(closed.support, expected, "support of {}", closed.itemset);
    }
}

#[test]
fn grocery_triple_drops_out_at_support_two() {
    let closed = closed_sets(&groceries(), 2);
    assert_eq!(closed.len(), 6);
    assert!(!closed.contains(&set(&["bread", "milk", "butter"])));
    assert!(closed.contains(&set(&["bread", "milk"])));
    assert!(closed.contains(&set(&["butter"])));
}

#[test]
fn duplicated_items_do_not_inflate_counts() {
    let closed = closed_sets(&groceries_with_duplicates(), 2);
    assert_eq!(closed.len(), 6);
    assert!(!closed.contains(&set(&["bread", "milk", "butter"])));
}

#[test]
fn only_singletons_are_closed_at_support_three() {
    let closed = closed_sets(&groceries(), 3);
    assert_eq!(closed.len(), 3);
    assert!(closed.iter().all(|itemset| itemset.len() == 1));
}

#[test]
fn nothing_is_closed_above_every_count() {
    assert!(closed_sets(&groceries(), 4).is_empty());
}

#[test]
fn closed_sets_with_absorbed_items() {
    let closed = closed_sets(&with_generators(), 3);
    assert_eq!(closed.len(), 4);
    for expected in [set(&["a"]), set(&["c"]), set(&["a", "b"]), set(&["a", "c"])] {
        assert!(closed.contains(&expected), "missing {expected}");
    }
    for excluded in [set(&["b"]), set(&["b", "c"]), set(&["a", "b", "c"])] {
        assert!(!closed.contains(&excluded), "unexpected {excluded}");
    }
}

#[test]
fn grocery_closed_sets_have_no_generators() {
    let dataset = groceries();
    let counts = count_itemsets(&dataset);
    let closed = find_closed(&counts, 2);
    let generators = find_generators(&closed, &counts, dataset.len(), 0.0);

    assert_eq!(generators.len(), 6);
    assert_eq!(generators.generator_count(), 0);
    assert!(candidate_rules(&dataset, 2).is_empty());
}

#[test]
fn b_generates_ab() {
    let dataset = with_generators();
    let counts = count_itemsets(&dataset);
    let closed = find_closed(&counts, 3);
    let generators = find_generators(&closed, &counts, dataset.len(), 0.0);

    for entry in &generators {
        if entry.closed == set(&["a", "b"]) {
            assert_eq!(entry.generators, vec![set(&["b"])]);
        } else {
            assert!(entry.generators.is_empty(), "{} has generators", entry.closed);
        }
    }
}

#[test]
fn single_rule_at_support_three() {
    let rules = candidate_rules(&with_generators(), 3);
    assert_eq!(
        rules,
        vec![Rule {
            generator: set(&["b"]),
            consequent: set(&["a"]),
            support: 4.0 / 6.0,
            confidence: 1.0,
        }]
    );
}

#[test]
fn two_rules_at_support_two_in_closed_order() {
    let rules = candidate_rules(&with_generators(), 2);
    assert_eq!(rules.len(), 2);

    assert_eq!(rules[0].generator, set(&["b"]));
    assert_eq!(rules[0].consequent, set(&["a"]));
    assert_eq!(rules[0].support, 4.0 / 6.0);
    assert_eq!(rules[0].confidence, 1.0);

    assert_eq!(rules[1].generator, set(&["b", "c"]));
    assert_eq!(rules[1].consequent, set(&["a"]));
    assert_eq!(rules[1].support, 2.0 / 6.0);
    assert_eq!(rules[1].confidence, 1.0);
}

#[test]
fn filtering_keeps_the_general_rule() {
    let rules = candidate_rules(&with_generators(), 3);
    let filtered = filter_rules(&rules, 0.2, 0.5);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].generator, set(&["b"]));
    assert_eq!(filtered[0].consequent, set(&["a"]));
}

#[test]
fn high_rule_support_filters_everything() {
    let rules = candidate_rules(&with_generators(), 3);
    assert!(filter_rules(&rules, 0.9, 0.5).is_empty());
}

#[test]
fn redundant_specialisation_is_removed() {
    let rules = candidate_rules(&with_generators(), 2);
    for min_rule_support in [0.01, 0.2] {
        let filtered = filter_rules(&rules, min_rule_support, 0.5);
        assert_eq!(filtered, vec![rules[0].clone()]);
    }
}
