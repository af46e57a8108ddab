use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::ExperimentConfig;
use crate::data::{sine_dataset, split_at_fraction};
use crate::error::Result;
use crate::network::Mlp;
use crate::report::{ConfigSummary, ExperimentReport, Outcome};
use crate::train::{evaluate_regression, train_loop};

const DEFAULT_SAMPLES: usize = 500;
const DEFAULT_TRAIN_FRACTION: f64 = 0.8;
/// Test predictions quoted in the report.
const SAMPLE_ROWS: usize = 5;

/// Fits `sin(x1 - x2 + x3 - x4)` on random inputs and reports training and
/// test error.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let count = config.sample_count.unwrap_or(DEFAULT_SAMPLES);
    let dataset = sine_dataset(count, &mut rng);
    let (train, test) = split_at_fraction(dataset, config.train_fraction.unwrap_or(DEFAULT_TRAIN_FRACTION))?;
    info!("sine: {} training / {} test examples", train.len(), test.len());

    let mut network = Mlp::new(config.topology, config.output_activation, &mut rng)?;
    let history = train_loop(&mut network, &train, &config.train, &mut rng)?;

    let mut eval = evaluate_regression(&mut network, &test)?;
    eval.predictions.truncate(SAMPLE_ROWS);
    info!("sine: test error {:.6}", eval.test_error);

    Ok(ExperimentReport {
        title: config.title.clone(),
        config: ConfigSummary::from(config),
        log_every: config.train.log_every,
        losses: history.logged,
        outcome: Outcome::Regression {
            final_training_error: history.final_loss,
            test_error: eval.test_error,
            samples: eval.predictions,
        },
    })
}
