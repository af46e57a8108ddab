use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::TrainingExample;
use crate::error::{MlpError, Result};
use crate::network::network::Mlp;
use crate::train::epoch_stats::{EpochStats, TrainingHistory};
use crate::train::train_config::{LossReduction, TrainConfig};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of mini-batch gradient descent
/// and returns the logged per-epoch losses.
///
/// # Arguments
/// - `network`  — modified in place
/// - `examples` — training set; must be non-empty
/// - `config`   — hyperparameters, validated before the first epoch
/// - `rng`      — drives the per-epoch shuffle when `config.shuffle` is set
///
/// # Errors
/// `InvalidConfig` for a bad config or empty training set, and
/// `DimensionMismatch` if any example does not fit the topology.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Mlp,
    examples: &[TrainingExample],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainingHistory> {
    config.validate()?;
    if examples.is_empty() {
        return Err(MlpError::InvalidConfig("training set is empty".into()));
    }

    info!(
        "training on {} examples for {} epochs (batch {}, lr {})",
        examples.len(),
        config.epochs,
        config.batch_size,
        config.learning_rate
    );

    let mut order: Vec<usize> = (0..examples.len()).collect();
    let mut history = TrainingHistory::default();

    for epoch in 1..=config.epochs {
        if config.shuffle {
            order.shuffle(rng);
        }

        let total = run_one_epoch(network, examples, &order, config)?;
        let loss = match config.loss_reduction {
            LossReduction::Sum => total,
            LossReduction::Mean => total / examples.len() as f64,
        };

        history.final_loss = loss;
        history.epochs_run = epoch;
        if config.is_logged(epoch) {
            debug!("epoch {epoch}: loss = {loss:.6}");
            history.logged.push(EpochStats { epoch, loss });
        }
    }

    info!("finished after {} epochs, final loss {:.6}", history.epochs_run, history.final_loss);
    Ok(history)
}

/// Runs one pass over `examples` in the given `order`, updating the weights
/// after every `batch_size` examples and once more for a trailing partial
/// batch. Returns the summed per-example loss.
pub fn run_one_epoch(
    network: &mut Mlp,
    examples: &[TrainingExample],
    order: &[usize],
    config: &TrainConfig,
) -> Result<f64> {
    let mut total_loss = 0.0;

    for batch in order.chunks(config.batch_size) {
        for &idx in batch {
            let example = &examples[idx];
            network.forward(&example.input)?;
            total_loss += network.backward(&example.input, &example.target)?;
        }
        network.update_weights(config.learning_rate);
    }

    Ok(total_loss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::OutputActivation;
    use crate::data::xor_table;
    use crate::network::Topology;
    use rand::{rngs::StdRng, SeedableRng};

    fn xor_net(seed: u64) -> Mlp {
        let mut rng = StdRng::seed_from_u64(seed);
        Mlp::new(Topology { input: 2, hidden: 4, output: 1 }, OutputActivation::Linear, &mut rng).unwrap()
    }

    #[test]
    fn history_records_logged_epochs_only() {
        let mut net = xor_net(1);
        let mut config = TrainConfig::new(120, 4, 0.5);
        config.log_every = 50;
        let history = train_loop(&mut net, &xor_table(), &config, &mut StdRng::seed_from_u64(0)).unwrap();

        let epochs: Vec<usize> = history.logged.iter().map(|s| s.epoch).collect();
        assert_eq!(epochs, vec![1, 50, 100, 120]);
        assert_eq!(history.epochs_run, 120);
        assert_eq!(history.final_loss, history.logged.last().unwrap().loss);
    }

    #[test]
    fn mean_reduction_divides_by_example_count() {
        let examples = xor_table();
        let mut config = TrainConfig::new(1, 4, 0.1);

        let mut a = xor_net(2);
        let sum = train_loop(&mut a, &examples, &config, &mut StdRng::seed_from_u64(0)).unwrap();

        config.loss_reduction = LossReduction::Mean;
        let mut b = xor_net(2);
        let mean = train_loop(&mut b, &examples, &config, &mut StdRng::seed_from_u64(0)).unwrap();

        assert!((sum.final_loss / 4.0 - mean.final_loss).abs() < 1e-12);
    }

    #[test]
    fn partial_batch_is_flushed_at_epoch_end() {
        let examples = xor_table();
        let mut net = xor_net(3);
        let config = TrainConfig::new(1, 3, 0.1);
        train_loop(&mut net, &examples, &config, &mut StdRng::seed_from_u64(0)).unwrap();
        let (g1, g2) = net.gradients();
        assert!(g1.is_zero() && g2.is_zero());
    }

    #[test]
    fn empty_training_set_and_bad_shapes_are_errors() {
        let mut net = xor_net(4);
        let config = TrainConfig::new(1, 1, 0.1);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            train_loop(&mut net, &[], &config, &mut rng),
            Err(MlpError::InvalidConfig(_))
        ));

        let bad = vec![TrainingExample::new(vec![1.0, 2.0, 3.0], vec![0.0])];
        assert!(matches!(
            train_loop(&mut net, &bad, &config, &mut rng),
            Err(MlpError::DimensionMismatch { .. })
        ));
    }
}
