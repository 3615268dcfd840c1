use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque item identifier (a product name, a code, ...).
pub type Item = String;

/// Order-independent set of items.
///
/// Items are kept sorted and de-duplicated, so two itemsets holding the same
/// items compare equal and hash identically regardless of the order they were
/// built from. Subset tests and set algebra are linear merges over the sorted
/// storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct Itemset(Vec<Item>);

impl Itemset {
    /// Build an itemset from any collection of items; duplicates collapse.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        let mut items: Vec<Item> = items.into_iter().map(Into::into).collect();
        items.sort();
        items.dedup();
        Self(items)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in ascending order.
    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(item))
            .is_ok()
    }

    /// Returns true when every item of `self` is also in `other`.
    pub fn is_subset(&self, other: &Itemset) -> bool {
        if self.len() > other.len() {
            return false;
        }

        let mut theirs = other.0.iter();
        'outer: for item in &self.0 {
            for candidate in theirs.by_ref() {
                match candidate.cmp(item) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'outer,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Subset test that also requires `other` to hold at least one more item.
    pub fn is_proper_subset(&self, other: &Itemset) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let mut left = self.0.iter().peekable();
        let mut right = other.0.iter().peekable();

        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => match a.cmp(b) {
                    Ordering::Less => left.next(),
                    Ordering::Greater => right.next(),
                    Ordering::Equal => {
                        right.next();
                        left.next()
                    }
                },
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            if let Some(item) = next {
                merged.push(item.clone());
            }
        }

        Itemset(merged)
    }

    /// Items of `self` that are not in `other`.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    /// All sub-itemsets with exactly `size` items, in lexicographic order.
    pub fn combinations(&self, size: usize) -> Vec<Itemset> {
        let n = self.len();
        if size == 0 || size > n {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            out.push(Itemset(
                indices.iter().map(|&idx| self.0[idx].clone()).collect(),
            ));

            let Some(pos) = (0..size).rev().find(|&pos| indices[pos] != pos + n - size) else {
                break;
            };
            indices[pos] += 1;
            for next in pos + 1..size {
                indices[next] = indices[next - 1] + 1;
            }
        }
        out
    }

    /// Every non-empty sub-itemset, smallest first (the itemset itself last).
    pub fn subsets(&self) -> Vec<Itemset> {
        (1..=self.len())
            .flat_map(|size| self.combinations(size))
            .collect()
    }

    /// Every non-empty sub-itemset strictly smaller than `self`.
    pub fn proper_subsets(&self) -> Vec<Itemset> {
        (1..self.len())
            .flat_map(|size| self.combinations(size))
            .collect()
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Itemset::new(items)
    }
}

impl From<Itemset> for Vec<Item> {
    fn from(itemset: Itemset) -> Self {
        itemset.0
    }
}

impl<S: Into<Item>> FromIterator<S> for Itemset {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Itemset::new(iter)
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset {
        Itemset::new(items.iter().copied())
    }

    #[test]
    fn construction_sorts_and_dedups() {
        let itemset = set(&["milk", "bread", "milk"]);
        assert_eq!(itemset.items(), &["bread".to_string(), "milk".to_string()]);
        assert_eq!(itemset, set(&["bread", "milk"]));
    }

    #[test]
    fn subset_checks() {
        let ab = set(&["a", "b"]);
        let abc = set(&["a", "b", "c"]);
        let ac = set(&["a", "c"]);
        let bd = set(&["b", "d"]);

        assert!(ab.is_subset(&abc));
        assert!(ab.is_proper_subset(&abc));
        assert!(ab.is_subset(&ab));
        assert!(!ab.is_proper_subset(&ab));
        assert!(!ab.is_subset(&ac));
        assert!(!bd.is_subset(&abc));
        assert!(Itemset::empty().is_subset(&ab));
    }

    #[test]
    fn union_and_difference() {
        let ab = set(&["a", "b"]);
        let bc = set(&["b", "c"]);
        assert_eq!(ab.union(&bc), set(&["a", "b", "c"]));
        assert_eq!(ab.difference(&bc), set(&["a"]));
        assert!(ab.difference(&ab).is_empty());
    }

    #[test]
    fn combinations_are_lexicographic() {
        let abcd = set(&["a", "b", "c", "d"]);
        let pairs: Vec<String> = abcd
            .combinations(2)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            pairs,
            vec!["{a, b}", "{a, c}", "{a, d}", "{b, c}", "{b, d}", "{c, d}"]
        );
        assert!(abcd.combinations(0).is_empty());
        assert!(abcd.combinations(5).is_empty());
        assert_eq!(abcd.combinations(4), vec![abcd.clone()]);
    }

    #[test]
    fn subsets_cover_power_set() {
        let abc = set(&["a", "b", "c"]);
        assert_eq!(abc.subsets().len(), 7);
        assert_eq!(abc.proper_subsets().len(), 6);
        assert!(set(&["a"]).proper_subsets().is_empty());
    }

    #[test]
    fn serde_normalizes_items() {
        let itemset: Itemset = serde_json::from_str(r#"["c","a","c"]"#).expect("parse itemset");
        assert_eq!(itemset, set(&["a", "c"]));
        assert_eq!(
            serde_json::to_string(&itemset).expect("serialize itemset"),
            r#"["a","c"]"#
        );
    }
}
