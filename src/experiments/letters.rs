use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::ExperimentConfig;
use crate::data::{load_letters, split_at_fraction, TrainingExample};
use crate::error::{MlpError, Result};
use crate::network::Mlp;
use crate::report::{ConfigSummary, ExperimentReport, Outcome};
use crate::train::{accuracy_percent, train_loop};

const DEFAULT_TRAIN_FRACTION: f64 = 0.8;

/// Loads the letter data from `config.dataset_path` and classifies it.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let path = config
        .dataset_path
        .as_ref()
        .ok_or_else(|| MlpError::InvalidConfig("letters experiment needs a dataset_path".into()))?;
    let dataset = load_letters(path)?;
    run_on(config, dataset)
}

/// Trains and evaluates on an already-loaded dataset; the first
/// `train_fraction` of it is the training set, in file order.
pub fn run_on(config: &ExperimentConfig, dataset: Vec<TrainingExample>) -> Result<ExperimentReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let (train, test) = split_at_fraction(dataset, config.train_fraction.unwrap_or(DEFAULT_TRAIN_FRACTION))?;
    info!("letters: {} training / {} test examples", train.len(), test.len());

    let mut network = Mlp::new(config.topology, config.output_activation, &mut rng)?;
    let history = train_loop(&mut network, &train, &config.train, &mut rng)?;

    let accuracy = accuracy_percent(&mut network, &test)?;
    info!("letters: test accuracy {accuracy:.2}%");

    Ok(ExperimentReport {
        title: config.title.clone(),
        config: ConfigSummary::from(config),
        log_every: config.train.log_every,
        losses: history.logged,
        outcome: Outcome::Classification { accuracy_percent: accuracy, test_examples: test.len() },
    })
}
