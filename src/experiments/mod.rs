//! The three reference experiments. Each takes an `ExperimentConfig`, builds
//! its dataset and network, trains, evaluates and returns the report; writing
//! the report is left to the caller.

pub mod xor;
pub mod sine;
pub mod letters;

use log::info;

use crate::config::{ExperimentConfig, ExperimentKind};
use crate::error::Result;
use crate::report::ExperimentReport;

/// Runs whichever experiment `config.kind` names.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    config.validate()?;
    info!("running {} experiment (seed {})", config.kind, config.seed);
    match config.kind {
        ExperimentKind::Xor => xor::run(config),
        ExperimentKind::Sine => sine::run(config),
        ExperimentKind::Letters => letters::run(config),
    }
}

/// Runs the experiment and writes its text report to `config.report_path`.
/// Nothing is written if the run fails.
pub fn run_and_write(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let report = run(config)?;
    report.write_text(&config.report_path)?;
    info!("results saved to {}", config.report_path.display());
    Ok(report)
}
