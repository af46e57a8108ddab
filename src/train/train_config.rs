use serde::{Serialize, Deserialize};

use crate::error::{MlpError, Result};

/// How per-example losses are combined into one number per epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReduction {
    Sum,
    /// Sum divided by the number of training examples.
    Mean,
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`         — total number of full passes over the training data
/// - `batch_size`     — examples per weight update; a trailing partial batch
///                      is applied at the end of each epoch
/// - `learning_rate`  — step size applied to the summed batch gradient
/// - `log_every`      — record the epoch loss at epoch 1, every multiple of
///                      this, and the final epoch
/// - `loss_reduction` — sum or mean of per-example losses
/// - `shuffle`        — reshuffle the example order at the start of each epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub log_every: usize,
    pub loss_reduction: LossReduction,
    pub shuffle: bool,
}

impl TrainConfig {
    /// Online learning with summed loss, no shuffling, logging every epoch.
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate,
            log_every: 1,
            loss_reduction: LossReduction::Sum,
            shuffle: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(MlpError::InvalidConfig("epochs must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(MlpError::InvalidConfig("batch_size must be at least 1".into()));
        }
        if self.log_every == 0 {
            return Err(MlpError::InvalidConfig("log_every must be at least 1".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MlpError::InvalidConfig(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Whether the loss of `epoch` (1-based) goes into the history.
    pub fn is_logged(&self, epoch: usize) -> bool {
        epoch == 1 || epoch % self.log_every == 0 || epoch == self.epochs
    }
}
