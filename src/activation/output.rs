use std::fmt;

use serde::{Deserialize, Serialize};

use crate::activation::activation::{sigmoid, sigmoid_derivative, softmax};
use crate::loss::{CrossEntropyLoss, SquaredErrorLoss};

/// Activation applied to the output layer, together with the loss it is
/// trained against.
///
/// The hidden layer is always sigmoid; only the output layer varies.
///
/// | variant   | forward          | loss                 | output delta                  |
/// |-----------|------------------|----------------------|-------------------------------|
/// | `Sigmoid` | sigmoid(z)       | 0.5·Σ(y − t)²        | (y − t)·y·(1 − y)             |
/// | `Linear`  | z                | 0.5·Σ(y − t)²        | y − t                         |
/// | `Softmax` | softmax(z)       | −Σ t·ln(y)           | y − t                         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputActivation {
    Sigmoid,
    Linear,
    Softmax,
}

impl OutputActivation {
    /// Maps output pre-activations `z` to output activations `out`.
    pub fn activate(self, z: &[f64], out: &mut [f64]) {
        match self {
            OutputActivation::Sigmoid => {
                for (o, &zi) in out.iter_mut().zip(z) {
                    *o = sigmoid(zi);
                }
            }
            OutputActivation::Linear => out.copy_from_slice(z),
            OutputActivation::Softmax => softmax(z, out),
        }
    }

    /// Writes ∂L/∂z for the output layer into `delta` and returns the
    /// per-example loss.
    pub fn output_delta(self, output: &[f64], target: &[f64], delta: &mut [f64]) -> f64 {
        match self {
            OutputActivation::Sigmoid => {
                SquaredErrorLoss::derivative(output, target, delta);
                for (d, &y) in delta.iter_mut().zip(output) {
                    *d *= sigmoid_derivative(y);
                }
                SquaredErrorLoss::loss(output, target)
            }
            OutputActivation::Linear => {
                SquaredErrorLoss::derivative(output, target, delta);
                SquaredErrorLoss::loss(output, target)
            }
            OutputActivation::Softmax => {
                CrossEntropyLoss::derivative(output, target, delta);
                CrossEntropyLoss::loss(output, target)
            }
        }
    }
}

impl fmt::Display for OutputActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputActivation::Sigmoid => "SIGMOID",
            OutputActivation::Linear => "LINEAR",
            OutputActivation::Softmax => "SOFTMAX",
        };
        f.write_str(name)
    }
}
