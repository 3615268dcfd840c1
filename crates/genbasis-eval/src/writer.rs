use std::fs;
use std::path::{Path, PathBuf};

use genbasis_core::Rule;
use genbasis_mine::MiningOutcome;

use crate::errors::EvalError;
use crate::metrics::RunStatistics;
use crate::report::{render_report, render_rules};

const REPORT_MAX_RULES: usize = 20;

/// Files written into a run directory.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub rules_path: PathBuf,
    pub statistics_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn write_rules_text(path: &Path, rules: &[Rule]) -> Result<(), EvalError> {
    ensure_parent(path)?;
    fs::write(path, render_rules(rules))?;
    Ok(())
}

pub fn write_rules_json(path: &Path, rules: &[Rule]) -> Result<(), EvalError> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(rules)?)?;
    Ok(())
}

pub fn write_statistics(path: &Path, stats: &RunStatistics) -> Result<(), EvalError> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(stats)?)?;
    Ok(())
}

pub fn write_report(path: &Path, report: &str) -> Result<(), EvalError> {
    ensure_parent(path)?;
    fs::write(path, report.as_bytes())?;
    Ok(())
}

/// Write `rules.json`, `statistics.json` and `report.md` into `run_dir`.
pub fn write_run_artifacts(
    run_dir: &Path,
    run_id: &str,
    input: &str,
    stats: &RunStatistics,
    outcome: &MiningOutcome,
) -> Result<RunArtifacts, EvalError> {
    fs::create_dir_all(run_dir)?;

    let rules_path = run_dir.join("rules.json");
    write_rules_json(&rules_path, &outcome.rules)?;

    let statistics_path = run_dir.join("statistics.json");
    write_statistics(&statistics_path, stats)?;

    let report_path = run_dir.join("report.md");
    let report = render_report(run_id, input, stats, outcome, REPORT_MAX_RULES);
    write_report(&report_path, &report)?;

    Ok(RunArtifacts {
        rules_path,
        statistics_path,
        report_path,
    })
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
