use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activation::OutputActivation;
use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::train::{EpochStats, Prediction};

/// Network and training settings echoed at the top of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub batch_size: usize,
    pub activation: OutputActivation,
}

impl From<&ExperimentConfig> for ConfigSummary {
    fn from(c: &ExperimentConfig) -> Self {
        ConfigSummary {
            inputs: c.topology.input,
            hidden: c.topology.hidden,
            outputs: c.topology.output,
            learning_rate: c.train.learning_rate,
            max_epochs: c.train.epochs,
            batch_size: c.train.batch_size,
            activation: c.output_activation,
        }
    }
}

/// Final evaluation, one shape per kind of experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Every row of a truth table with the network's answer.
    Boolean {
        rows: Vec<Prediction>,
        rms_error_percent: f64,
    },
    /// Training/test error of a function fit, plus a few sample predictions.
    Regression {
        final_training_error: f64,
        test_error: f64,
        samples: Vec<Prediction>,
    },
    Classification {
        accuracy_percent: f64,
        test_examples: usize,
    },
}

/// Everything one experiment run produces, in the order it is written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub title: String,
    pub config: ConfigSummary,
    pub log_every: usize,
    pub losses: Vec<EpochStats>,
    pub outcome: Outcome,
}

/// Plain-text rendering of the report.
impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f, "Configuration:")?;
        writeln!(f, "Number of Inputs: {}", c.inputs)?;
        writeln!(f, "Number of Hidden Units: {}", c.hidden)?;
        writeln!(f, "Number of Outputs: {}", c.outputs)?;
        writeln!(f, "Learning Rate: {:?}", c.learning_rate)?;
        writeln!(f, "Max Epochs: {}", c.max_epochs)?;
        writeln!(f, "Batch Size: {}", c.batch_size)?;
        writeln!(f, "Activation Function: {}", c.activation)?;
        writeln!(f)?;

        writeln!(f, "Training Error Over Epochs (Logged Every {} Epochs):", self.log_every)?;
        writeln!(f, "Epoch\tError")?;
        for s in &self.losses {
            writeln!(f, "{}\t{:?}", s.epoch, s.loss)?;
        }
        writeln!(f)?;

        match &self.outcome {
            Outcome::Boolean { rows, rms_error_percent } => {
                writeln!(f, "Results:")?;
                for r in rows {
                    writeln!(
                        f,
                        "Input: {:?}, Expected Output: {:.1}, Predicted Output: {:.4}",
                        r.input, r.expected, r.predicted
                    )?;
                }
                writeln!(f)?;
                writeln!(f, "Final Root Mean Squared Error: {:.2}%", rms_error_percent)
            }
            Outcome::Regression { final_training_error, test_error, samples } => {
                writeln!(f, "Final Training Error: {:?}", final_training_error)?;
                writeln!(f, "Final Test Error: {:?}", test_error)?;
                writeln!(f)?;
                writeln!(f, "Sample Calculations from Test Set:")?;
                for p in samples {
                    writeln!(
                        f,
                        "Input: {:?}, Expected: {:.4}, Predicted: {:.4}, Squared Error: {:.4}",
                        p.input, p.expected, p.predicted, p.squared_error
                    )?;
                }
                Ok(())
            }
            Outcome::Classification { accuracy_percent, test_examples } => {
                writeln!(f, "Test Examples: {}", test_examples)?;
                writeln!(f, "Final Test Set Accuracy: {:.2}%", accuracy_percent)
            }
        }
    }
}

impl ExperimentReport {
    /// Writes the text rendering to `path`, replacing any existing file.
    pub fn write_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Serializes the report to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ConfigSummary {
        ConfigSummary {
            inputs: 2,
            hidden: 4,
            outputs: 1,
            learning_rate: 1.0,
            max_epochs: 2000,
            batch_size: 4,
            activation: OutputActivation::Linear,
        }
    }

    fn boolean_report() -> ExperimentReport {
        ExperimentReport {
            title: "XOR Experiment Results".into(),
            config: summary(),
            log_every: 50,
            losses: vec![
                EpochStats { epoch: 1, loss: 1.5 },
                EpochStats { epoch: 50, loss: 0.25 },
            ],
            outcome: Outcome::Boolean {
                rows: vec![Prediction {
                    input: vec![0.0, 1.0],
                    expected: 1.0,
                    predicted: 0.984375,
                    squared_error: 0.000244140625,
                }],
                rms_error_percent: 1.25,
            },
        }
    }

    #[test]
    fn renders_config_loss_table_and_truth_rows() {
        let text = boolean_report().to_string();
        assert!(text.starts_with("XOR Experiment Results\n======================\n"));
        assert!(text.contains("Number of Hidden Units: 4\n"));
        assert!(text.contains("Learning Rate: 1.0\n"));
        assert!(text.contains("Activation Function: LINEAR\n"));
        assert!(text.contains("Epoch\tError\n1\t1.5\n50\t0.25\n"));
        assert!(text.contains("Input: [0.0, 1.0], Expected Output: 1.0, Predicted Output: 0.9844\n"));
        assert!(text.ends_with("Final Root Mean Squared Error: 1.25%\n"));
    }

    #[test]
    fn renders_regression_and_classification_outcomes() {
        let mut report = boolean_report();
        report.outcome = Outcome::Regression {
            final_training_error: 0.5,
            test_error: 0.125,
            samples: vec![Prediction { input: vec![0.5], expected: 0.25, predicted: 0.5, squared_error: 0.0625 }],
        };
        let text = report.to_string();
        assert!(text.contains("Final Test Error: 0.125\n"));
        assert!(text.contains("Input: [0.5], Expected: 0.2500, Predicted: 0.5000, Squared Error: 0.0625\n"));

        report.outcome = Outcome::Classification { accuracy_percent: 81.2345, test_examples: 4000 };
        assert!(report.to_string().ends_with("Final Test Set Accuracy: 81.23%\n"));
    }

    #[test]
    fn text_and_json_files_are_written() {
        let dir = std::env::temp_dir();
        let txt = dir.join("backprop-mlp-report-test.txt");
        let json = dir.join("backprop-mlp-report-test.json");
        let report = boolean_report();

        report.write_text(&txt).unwrap();
        assert_eq!(std::fs::read_to_string(&txt).unwrap(), report.to_string());

        report.save_json(&json).unwrap();
        let back: ExperimentReport =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(back, report);

        std::fs::remove_file(txt).ok();
        std::fs::remove_file(json).ok();
    }
}
