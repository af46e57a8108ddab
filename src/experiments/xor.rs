use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::ExperimentConfig;
use crate::data::xor_table;
use crate::error::Result;
use crate::network::Mlp;
use crate::report::{ConfigSummary, ExperimentReport, Outcome};
use crate::train::{evaluate_regression, rms_error_percent, train_loop};

/// Fits the XOR truth table and reports every row plus the RMS error.
/// The whole table is both training and evaluation set.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let examples = xor_table();

    let mut network = Mlp::new(config.topology, config.output_activation, &mut rng)?;
    let history = train_loop(&mut network, &examples, &config.train, &mut rng)?;

    let rms = rms_error_percent(&mut network, &examples)?;
    let rows = evaluate_regression(&mut network, &examples)?.predictions;
    info!("xor: final rms error {rms:.2}%");

    Ok(ExperimentReport {
        title: config.title.clone(),
        config: ConfigSummary::from(config),
        log_every: config.train.log_every,
        losses: history.logged,
        outcome: Outcome::Boolean { rows, rms_error_percent: rms },
    })
}
