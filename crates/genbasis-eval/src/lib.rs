//! Statistics, reports and output files for mining runs.

pub mod errors;
pub mod metrics;
pub mod report;
pub mod writer;

pub use errors::EvalError;
pub use metrics::{RunStatistics, round_to};
pub use report::{render_report, render_rules, render_summary};
pub use writer::{
    RunArtifacts, write_report, write_rules_json, write_rules_text, write_run_artifacts,
    write_statistics,
};
