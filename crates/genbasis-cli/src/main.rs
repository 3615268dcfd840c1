mod params_file;
mod registry;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use genbasis_core::{MiningParams, ValidationReport, params_json_schema, parse_params};
use genbasis_eval::{
    EvalError, RunStatistics, render_summary, write_rules_text, write_run_artifacts,
    write_statistics,
};
use genbasis_load::{
    CsvLayout, LoadError, TransactionDataset, TransactionSource, source_with_layout,
};
use genbasis_mine::{MineError, MiningEngine};
use params_file::{ParamOverrides, load_params_value};
use registry::{RunContext, init_console_logging, init_run_logging, start_run};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("mining error: {0}")]
    Mine(#[from] MineError),
    #[error("output error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "genbasis",
    version,
    about = "Non-redundant association rules from closed itemsets and their generators"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mine rules from a transaction file.
    Mine(MineArgs),
    /// Validate a parameter file without mining.
    CheckParams(CheckParamsArgs),
    /// Print the JSON Schema for parameter files.
    Schema,
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// Parameter file (.json or .toml).
    #[arg(long, default_value = "parameters.json")]
    params: PathBuf,
    /// Override min_support (absolute count).
    #[arg(long)]
    min_support: Option<u64>,
    /// Override min_rule_support (fraction of transactions).
    #[arg(long)]
    min_rule_support: Option<f64>,
    /// Override min_confidence.
    #[arg(long)]
    min_confidence: Option<f64>,
    /// Override epsilon (generator support tolerance).
    #[arg(long)]
    epsilon: Option<f64>,
}

impl ParamArgs {
    fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            min_support: self.min_support,
            min_rule_support: self.min_rule_support,
            min_confidence: self.min_confidence,
            epsilon: self.epsilon,
        }
    }
}

#[derive(Args, Debug)]
struct MineArgs {
    /// Transaction file (.csv or .txt).
    #[arg(long)]
    input: PathBuf,
    /// Output path for the rules text file.
    #[arg(long, default_value = "results/output.txt")]
    output: PathBuf,
    /// Output path for statistics.json.
    #[arg(long, default_value = "results/statistics.json")]
    stats: PathBuf,
    /// Output directory for runs.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
    /// CSV column(s) identifying one transaction.
    #[arg(long = "group-by", value_name = "COLUMN")]
    group_by: Vec<String>,
    /// CSV column holding the item.
    #[arg(long, value_name = "COLUMN")]
    item_column: Option<String>,
    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Args, Debug)]
struct CheckParamsArgs {
    #[command(flatten)]
    params: ParamArgs,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Mine(args) => run_mine(args),
        Command::CheckParams(args) => run_check_params(args),
        Command::Schema => run_schema(),
    }
}

fn run_mine(args: MineArgs) -> Result<(), CliError> {
    let (params, report) = resolve_params(&args.params)?;

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        run_dir: args.run_dir.clone(),
        input: args.input.clone(),
        params: params.clone(),
    };

    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        input = %args.input.display(),
        config = %run_paths.config_path.display()
    );
    log_warnings(&report);

    let timer = Instant::now();

    let dataset = load_dataset(&args)?;
    tracing::info!(event = "dataset_loaded", transactions = dataset.len());

    let engine = MiningEngine::new(params.clone())?;
    let outcome = engine.run(&dataset);
    let stats = RunStatistics::from_outcome(&params, &outcome);

    println!(
        "{}",
        render_summary(&outcome.rules, outcome.coverage, outcome.mining_time)
    );

    write_rules_text(&args.output, &outcome.rules)?;
    tracing::info!(event = "rules_written", path = %args.output.display());

    write_statistics(&args.stats, &stats)?;
    tracing::info!(event = "statistics_written", path = %args.stats.display());

    let input = args.input.display().to_string();
    let artifacts = write_run_artifacts(&run_paths.root, &run_id, &input, &stats, &outcome)?;
    tracing::info!(event = "report_written", path = %artifacts.report_path.display());

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    Ok(())
}

fn run_check_params(args: CheckParamsArgs) -> Result<(), CliError> {
    init_console_logging()?;
    let (params, report) = resolve_params(&args.params)?;
    log_warnings(&report);
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(&params_json_schema())?);
    Ok(())
}

fn resolve_params(args: &ParamArgs) -> Result<(MiningParams, ValidationReport), CliError> {
    let value = load_params_value(&args.params, &args.overrides())?;
    parse_params(&value).map_err(|report| CliError::InvalidConfig(report.summary()))
}

fn load_dataset(args: &MineArgs) -> Result<TransactionDataset, CliError> {
    let mut layout = CsvLayout::default();
    if !args.group_by.is_empty() {
        layout.group_by = args.group_by.clone();
    }
    if let Some(item_column) = &args.item_column {
        layout.item_column = item_column.clone();
    }
    let source = source_with_layout(&args.input, layout)?;
    Ok(source.load()?)
}

fn log_warnings(report: &ValidationReport) {
    for warning in &report.warnings {
        tracing::warn!(
            code = %warning.code,
            path = %warning.path,
            hint = warning.hint.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
    }
}
