use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::activation::OutputActivation;
use crate::data::letters::{LETTER_CLASSES, LETTER_FEATURES};
use crate::error::{MlpError, Result};
use crate::network::Topology;
use crate::train::{LossReduction, TrainConfig};

/// Which of the three experiments a configuration drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentKind {
    /// Fit the exclusive-or truth table.
    Xor,
    /// Regress `sin(x1 - x2 + x3 - x4)` on random inputs.
    Sine,
    /// Classify the UCI letter-recognition data.
    Letters,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 3] = [ExperimentKind::Xor, ExperimentKind::Sine, ExperimentKind::Letters];

    /// `(inputs, outputs)` the dataset of this experiment dictates.
    fn io_shape(self) -> (usize, usize) {
        match self {
            ExperimentKind::Xor => (2, 1),
            ExperimentKind::Sine => (4, 1),
            ExperimentKind::Letters => (LETTER_FEATURES, LETTER_CLASSES),
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExperimentKind::Xor => "xor",
            ExperimentKind::Sine => "sine",
            ExperimentKind::Letters => "letters",
        };
        f.write_str(name)
    }
}

impl FromStr for ExperimentKind {
    type Err = MlpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xor" => Ok(ExperimentKind::Xor),
            "sine" => Ok(ExperimentKind::Sine),
            "letters" => Ok(ExperimentKind::Letters),
            other => Err(MlpError::InvalidConfig(format!(
                "unknown experiment '{other}' (expected xor, sine or letters)"
            ))),
        }
    }
}

/// A fully serializable description of one experiment run: network shape,
/// training hyperparameters, data source and where the report goes.
///
/// The presets reproduce the three reference experiments; a JSON file with
/// the same fields can replace any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub kind: ExperimentKind,
    /// Heading of the text report.
    pub title: String,
    pub topology: Topology,
    pub output_activation: OutputActivation,
    #[serde(flatten)]
    pub train: TrainConfig,
    /// Seeds weight initialisation, data generation and shuffling.
    pub seed: u64,
    pub report_path: PathBuf,
    /// Letters only: the comma-delimited data file.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Sine only: how many examples to generate.
    #[serde(default)]
    pub sample_count: Option<usize>,
    /// Fraction of the data used for training; the rest is the test set.
    #[serde(default)]
    pub train_fraction: Option<f64>,
}

impl ExperimentConfig {
    /// 2-4-1 linear network on the XOR table, one full-batch update per
    /// epoch.
    pub fn xor() -> Self {
        ExperimentConfig {
            kind: ExperimentKind::Xor,
            title: "XOR Experiment Results".into(),
            topology: Topology { input: 2, hidden: 4, output: 1 },
            output_activation: OutputActivation::Linear,
            train: TrainConfig {
                epochs: 2000,
                batch_size: 4,
                learning_rate: 1.0,
                log_every: 50,
                loss_reduction: LossReduction::Sum,
                shuffle: false,
            },
            seed: 1,
            report_path: "XORExperimentResults.txt".into(),
            dataset_path: None,
            sample_count: None,
            train_fraction: None,
        }
    }

    /// 4-5-1 linear network on 500 sine samples, 400 for training.
    pub fn sine() -> Self {
        ExperimentConfig {
            kind: ExperimentKind::Sine,
            title: "Sine Experiment Results".into(),
            topology: Topology { input: 4, hidden: 5, output: 1 },
            output_activation: OutputActivation::Linear,
            train: TrainConfig {
                epochs: 5000,
                batch_size: 5,
                learning_rate: 0.01,
                log_every: 500,
                loss_reduction: LossReduction::Sum,
                shuffle: true,
            },
            seed: 2,
            report_path: "SineExperimentResults.txt".into(),
            dataset_path: None,
            sample_count: Some(500),
            train_fraction: Some(0.8),
        }
    }

    /// 16-40-26 softmax network on the letter data, 80/20 split.
    pub fn letters() -> Self {
        ExperimentConfig {
            kind: ExperimentKind::Letters,
            title: "Letter Recognition Experiment Results".into(),
            topology: Topology { input: LETTER_FEATURES, hidden: 40, output: LETTER_CLASSES },
            output_activation: OutputActivation::Softmax,
            train: TrainConfig {
                epochs: 2000,
                batch_size: 10,
                learning_rate: 0.1,
                log_every: 200,
                loss_reduction: LossReduction::Mean,
                shuffle: true,
            },
            seed: 42,
            report_path: "LetterRecognitionExperimentResults.txt".into(),
            dataset_path: Some("letter-recognition.data".into()),
            sample_count: None,
            train_fraction: Some(0.8),
        }
    }

    pub fn preset(kind: ExperimentKind) -> Self {
        match kind {
            ExperimentKind::Xor => Self::xor(),
            ExperimentKind::Sine => Self::sine(),
            ExperimentKind::Letters => Self::letters(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.topology.validate()?;
        self.train.validate()?;

        let (inputs, outputs) = self.kind.io_shape();
        if self.topology.input != inputs || self.topology.output != outputs {
            return Err(MlpError::InvalidConfig(format!(
                "{} needs {} inputs and {} outputs, topology has {} and {}",
                self.kind, inputs, outputs, self.topology.input, self.topology.output
            )));
        }
        if let Some(f) = self.train_fraction {
            if !(f > 0.0 && f < 1.0) {
                return Err(MlpError::InvalidConfig(format!("train_fraction must be in (0, 1), got {f}")));
            }
        }
        if self.sample_count == Some(0) {
            return Err(MlpError::InvalidConfig("sample_count must be at least 1".into()));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: ExperimentConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
