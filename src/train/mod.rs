pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;
pub mod metrics;

pub use epoch_stats::{EpochStats, TrainingHistory};
pub use train_config::{LossReduction, TrainConfig};
pub use loop_fn::{run_one_epoch, train_loop};
pub use metrics::{accuracy_percent, argmax, evaluate_regression, rms_error_percent, Prediction, RegressionEval};
