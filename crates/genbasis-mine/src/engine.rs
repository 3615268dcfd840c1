use std::time::{Duration, Instant};

use genbasis_core::{MiningParams, Rule, TransactionDataset};
use tracing::{debug, info};

use crate::closure::{ClosedItemset, find_closed};
use crate::counting::{CountingStrategy, PowerSetCounter};
use crate::coverage::coverage;
use crate::errors::MineError;
use crate::generators::{GeneratorTable, find_generators};
use crate::redundancy::filter_rules;
use crate::synthesis::synthesize_rules;

/// Everything a mining run produced.
#[derive(Debug, Clone)]
pub struct MiningOutcome {
    pub num_transactions: usize,
    pub itemsets_counted: usize,
    pub closed: Vec<ClosedItemset>,
    pub generators: GeneratorTable,
    pub candidate_rules: Vec<Rule>,
    pub rules: Vec<Rule>,
    pub coverage: f64,
    /// Time spent from counting through redundancy filtering.
    pub mining_time: Duration,
}

/// Entry point that chains the mining stages for one parameter set.
#[derive(Debug, Clone)]
pub struct MiningEngine<C = PowerSetCounter> {
    params: MiningParams,
    counter: C,
}

impl MiningEngine<PowerSetCounter> {
    /// Validate `params` and build an engine with power-set counting.
    pub fn new(params: MiningParams) -> Result<Self, MineError> {
        Self::with_counter(params, PowerSetCounter)
    }
}

impl<C: CountingStrategy> MiningEngine<C> {
    pub fn with_counter(params: MiningParams, counter: C) -> Result<Self, MineError> {
        params.validate()?;
        Ok(Self { params, counter })
    }

    pub fn params(&self) -> &MiningParams {
        &self.params
    }

    pub fn run(&self, dataset: &TransactionDataset) -> MiningOutcome {
        let params = &self.params;
        let num_transactions = dataset.len();

        info!(
            transactions = num_transactions,
            min_support = params.min_support,
            min_rule_support = params.min_rule_support,
            min_confidence = params.min_confidence,
            epsilon = params.epsilon,
            counter = self.counter.name(),
            "mining started"
        );

        let start = Instant::now();

        let counts = self.counter.count(dataset);
        debug!(itemsets = counts.len(), "itemsets counted");

        let closed = find_closed(&counts, params.min_support);
        debug!(closed = closed.len(), "closed itemsets found");

        let generators = find_generators(&closed, &counts, num_transactions, params.epsilon);
        debug!(generators = generators.generator_count(), "generators mined");

        let candidate_rules = synthesize_rules(&generators, &closed, &counts, num_transactions);
        debug!(candidate_rules = candidate_rules.len(), "rules synthesized");

        let rules = filter_rules(
            &candidate_rules,
            params.min_rule_support,
            params.min_confidence,
        );

        let mining_time = start.elapsed();
        let coverage = coverage(&rules, dataset);

        info!(
            itemsets = counts.len(),
            closed = closed.len(),
            candidate_rules = candidate_rules.len(),
            rules = rules.len(),
            coverage,
            duration_ms = mining_time.as_millis() as u64,
            "mining finished"
        );

        MiningOutcome {
            num_transactions,
            itemsets_counted: counts.len(),
            closed,
            generators,
            candidate_rules,
            rules,
            coverage,
            mining_time,
        }
    }
}
