use genbasis_core::Rule;

/// Keep rules that meet both thresholds.
pub fn threshold_rules(rules: &[Rule], min_support: f64, min_confidence: f64) -> Vec<Rule> {
    rules
        .iter()
        .filter(|rule| rule.support >= min_support && rule.confidence >= min_confidence)
        .cloned()
        .collect()
}

/// Drop every rule dominated by another rule of the same list.
///
/// `r1` is dominated by a distinct `r2` when `r2` reaches at least the same
/// confidence and either has a subset generator with the same consequent, or
/// is the mirror of `r1` (generator and consequent swapped). The scan runs in
/// list order and each rule is compared against the whole list, including
/// rules that are dropped themselves; two mirror rules of equal confidence
/// therefore eliminate each other.
pub fn remove_redundant(rules: &[Rule]) -> Vec<Rule> {
    let mut kept = Vec::new();
    for r1 in rules {
        let mut redundant = false;
        for r2 in rules {
            if r1 == r2 {
                continue;
            }
            if dominates(r2, r1) {
                redundant = true;
                break;
            }
        }
        if !redundant {
            kept.push(r1.clone());
        }
    }
    kept
}

/// Threshold `rules`, then remove the redundant ones.
pub fn filter_rules(rules: &[Rule], min_support: f64, min_confidence: f64) -> Vec<Rule> {
    remove_redundant(&threshold_rules(rules, min_support, min_confidence))
}

fn dominates(r2: &Rule, r1: &Rule) -> bool {
    let at_least_as_confident = r1.confidence <= r2.confidence;
    let more_general = r2.generator.is_subset(&r1.generator) && r2.consequent == r1.consequent;
    (more_general || r2.is_mirror_of(r1)) && at_least_as_confident
}
