use std::env;
use std::path::PathBuf;

use genbasis_core::{MiningParams, TransactionDataset};
use genbasis_eval::{RunStatistics, render_summary, write_run_artifacts};
use genbasis_mine::MiningEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("genbasis_summary"));

    let dataset = TransactionDataset::from_baskets(vec![
        vec!["bread", "milk"],
        vec!["bread", "milk", "eggs"],
        vec!["bread", "butter"],
        vec!["bread", "milk", "butter"],
        vec!["milk", "eggs"],
    ]);
    let params = MiningParams {
        min_support: 2,
        min_rule_support: 0.2,
        min_confidence: 0.5,
        epsilon: 0.0,
    };

    let outcome = MiningEngine::new(params.clone())?.run(&dataset);
    let stats = RunStatistics::from_outcome(&params, &outcome);
    println!(
        "{}",
        render_summary(&outcome.rules, outcome.coverage, outcome.mining_time)
    );

    let artifacts = write_run_artifacts(&out_dir, "example", "in-memory", &stats, &outcome)?;
    println!("report_path={}", artifacts.report_path.display());
    Ok(())
}
