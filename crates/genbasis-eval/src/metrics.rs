use std::time::Duration;

use genbasis_core::MiningParams;
use genbasis_mine::MiningOutcome;
use serde::{Deserialize, Serialize};

/// Machine-readable summary of one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub min_support: u64,
    pub min_rule_support: f64,
    pub min_confidence: f64,
    pub epsilon: f64,
    pub rules_count: usize,
    /// Share of transactions covered by at least one rule, 4 decimals.
    pub coverage: f64,
    /// Counting through redundancy filtering, in seconds with 2 decimals.
    pub execution_time_sec: f64,
}

impl RunStatistics {
    pub fn new(
        params: &MiningParams,
        rules_count: usize,
        coverage: f64,
        mining_time: Duration,
    ) -> Self {
        Self {
            min_support: params.min_support,
            min_rule_support: params.min_rule_support,
            min_confidence: params.min_confidence,
            epsilon: params.epsilon,
            rules_count,
            coverage: round_to(coverage, 4),
            execution_time_sec: round_to(mining_time.as_secs_f64(), 2),
        }
    }

    pub fn from_outcome(params: &MiningParams, outcome: &MiningOutcome) -> Self {
        Self::new(
            params,
            outcome.rules.len(),
            outcome.coverage,
            outcome.mining_time,
        )
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
