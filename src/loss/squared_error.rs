/// Half sum-of-squares loss, paired with Sigmoid and Linear outputs.
pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Scalar loss: 0.5 * sum((predicted - expected)²)
    ///
    /// Summed, not averaged, over the outputs.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| 0.5 * (p - y).powi(2))
            .sum()
    }

    /// Per-output gradient w.r.t. the output activation: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64], out: &mut [f64]) {
        for ((d, p), y) in out.iter_mut().zip(predicted).zip(expected) {
            *d = p - y;
        }
    }
}
