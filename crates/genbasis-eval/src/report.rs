use std::time::Duration;

use genbasis_core::Rule;
use genbasis_mine::MiningOutcome;

use crate::metrics::RunStatistics;

/// One line per rule, newline-terminated.
pub fn render_rules(rules: &[Rule]) -> String {
    let mut out = String::new();
    for rule in rules {
        out.push_str(&rule.to_string());
        out.push('\n');
    }
    out
}

/// Console summary: the rules, then count, coverage and timing.
pub fn render_summary(rules: &[Rule], coverage: f64, mining_time: Duration) -> String {
    let mut lines: Vec<String> = rules.iter().map(ToString::to_string).collect();
    lines.push(format!("rules: {}", rules.len()));
    lines.push(format!("coverage: {:.2}%", coverage * 100.0));
    lines.push(format!(
        "execution time: {:.2} s",
        mining_time.as_secs_f64()
    ));
    lines.join("\n")
}

/// Render a deterministic markdown report for a finished run.
pub fn render_report(
    run_id: &str,
    input: &str,
    stats: &RunStatistics,
    outcome: &MiningOutcome,
    max_rules: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push("# Genbasis Mining Report".to_string());
    lines.push(String::new());
    lines.push("## Run summary".to_string());
    lines.push(format!("- run_id: {run_id}"));
    lines.push(format!("- input: {input}"));
    lines.push(format!("- transactions: {}", outcome.num_transactions));
    lines.push(String::new());

    lines.push("## Parameters".to_string());
    lines.push("| parameter | value |".to_string());
    lines.push("| --- | --- |".to_string());
    lines.push(format!("| min_support | {} |", stats.min_support));
    lines.push(format!("| min_rule_support | {} |", stats.min_rule_support));
    lines.push(format!("| min_confidence | {} |", stats.min_confidence));
    lines.push(format!("| epsilon | {} |", stats.epsilon));
    lines.push(String::new());

    lines.push("## Pipeline".to_string());
    lines.push("| stage | count |".to_string());
    lines.push("| --- | --- |".to_string());
    lines.push(format!("| itemsets counted | {} |", outcome.itemsets_counted));
    lines.push(format!("| closed itemsets | {} |", outcome.closed.len()));
    lines.push(format!(
        "| generators | {} |",
        outcome.generators.generator_count()
    ));
    lines.push(format!("| candidate rules | {} |", outcome.candidate_rules.len()));
    lines.push(format!("| rules kept | {} |", stats.rules_count));
    lines.push(String::new());

    lines.push("## Results".to_string());
    lines.push(format!("- coverage: {}", stats.coverage));
    lines.push(format!("- execution_time_sec: {}", stats.execution_time_sec));
    lines.push(String::new());

    if !outcome.rules.is_empty() {
        lines.push("## Top rules".to_string());
        for rule in outcome.rules.iter().take(max_rules) {
            lines.push(format!("- {rule}"));
        }
        if outcome.rules.len() > max_rules {
            lines.push(format!(
                "- ... {} more in rules.json",
                outcome.rules.len() - max_rules
            ));
        }
        lines.push(String::new());
    }

    lines.push("## Notes".to_string());
    lines.extend(notes(stats, outcome));
    lines.join("\n")
}

fn notes(stats: &RunStatistics, outcome: &MiningOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    if outcome.num_transactions == 0 {
        lines.push("- dataset is empty; check the input path and format.".to_string());
    } else if outcome.closed.is_empty() {
        lines.push("- no closed itemsets; lower min_support.".to_string());
    } else if outcome.candidate_rules.is_empty() {
        lines.push("- closed itemsets have no generators; raise epsilon or lower min_support.".to_string());
    } else if stats.rules_count == 0 {
        lines.push("- every rule was filtered; lower min_rule_support or min_confidence.".to_string());
    }
    if stats.rules_count > 0 && stats.coverage < 0.5 {
        lines.push("- rules cover less than half of the transactions.".to_string());
    }
    if lines.is_empty() {
        lines.push("- nothing to flag.".to_string());
    }
    lines
}
