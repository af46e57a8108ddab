use serde::{Serialize, Deserialize};

/// Training loss recorded for one logged epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Loss over the epoch, summed or averaged per `LossReduction`.
    pub loss: f64,
}

/// Everything `train_loop` observed over a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Losses at the logged epochs, in epoch order.
    pub logged: Vec<EpochStats>,
    /// Loss of the last completed epoch.
    pub final_loss: f64,
    pub epochs_run: usize,
}
