pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;
pub mod data;
pub mod report;
pub mod config;
pub mod experiments;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::OutputActivation;
pub use network::{Mlp, Topology};
pub use optim::sgd::Sgd;
pub use data::TrainingExample;
pub use train::{train_loop, TrainConfig, TrainingHistory};
pub use config::{ExperimentConfig, ExperimentKind};
pub use report::ExperimentReport;
pub use error::{MlpError, Result};
