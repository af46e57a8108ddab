use serde::{Serialize, Deserialize};

use crate::data::TrainingExample;
use crate::error::{check_len, Result};
use crate::network::network::Mlp;

/// Index of the maximum element in a slice. The first maximum wins on ties;
/// an empty slice gives 0.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_i, best), (i, &x)| {
            if x > best { (i, x) } else { (best_i, best) }
        })
        .0
}

/// Percentage of examples whose predicted class (argmax of the output)
/// matches the argmax of the target. Empty input gives 0.
pub fn accuracy_percent(network: &mut Mlp, examples: &[TrainingExample]) -> Result<f64> {
    if examples.is_empty() {
        return Ok(0.0);
    }
    let outputs = network.topology().output;
    let mut correct = 0usize;
    for example in examples {
        check_len("target", outputs, example.target.len())?;
        let output = network.forward(&example.input)?;
        if argmax(output) == argmax(&example.target) {
            correct += 1;
        }
    }
    Ok(correct as f64 / examples.len() as f64 * 100.0)
}

/// Root-mean-squared error of the first output, as a percentage:
/// `100 * sqrt(sum((y - t)²) / n)`.
pub fn rms_error_percent(network: &mut Mlp, examples: &[TrainingExample]) -> Result<f64> {
    if examples.is_empty() {
        return Ok(0.0);
    }
    let outputs = network.topology().output;
    let mut sum_sq = 0.0;
    for example in examples {
        check_len("target", outputs, example.target.len())?;
        let output = network.forward(&example.input)?;
        let diff = output[0] - example.target[0];
        sum_sq += diff * diff;
    }
    Ok((sum_sq / examples.len() as f64).sqrt() * 100.0)
}

/// One test-set prediction of a single-output network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub input: Vec<f64>,
    pub expected: f64,
    pub predicted: f64,
    pub squared_error: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionEval {
    /// Half the summed squared error over the test set.
    pub test_error: f64,
    /// Every prediction, in test-set order.
    pub predictions: Vec<Prediction>,
}

/// Evaluates the first output of `network` against each example's first
/// target.
pub fn evaluate_regression(network: &mut Mlp, examples: &[TrainingExample]) -> Result<RegressionEval> {
    let outputs = network.topology().output;
    let mut predictions = Vec::with_capacity(examples.len());
    for example in examples {
        check_len("target", outputs, example.target.len())?;
        let predicted = network.forward(&example.input)?[0];
        let expected = example.target[0];
        let diff = predicted - expected;
        predictions.push(Prediction {
            input: example.input.clone(),
            expected,
            predicted,
            squared_error: diff * diff,
        });
    }
    let test_error = predictions.iter().map(|p| p.squared_error).sum::<f64>() / 2.0;
    Ok(RegressionEval { test_error, predictions })
}
