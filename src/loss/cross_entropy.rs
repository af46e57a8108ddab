/// Categorical cross-entropy loss for use with a Softmax output layer.
///
/// No epsilon is added inside the logarithm: a predicted probability of
/// exactly zero on a class with positive target weight gives an infinite loss.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Computes the scalar cross-entropy loss:
    ///   L = -sum(expected[i] * ln(predicted[i]))
    ///
    /// `predicted` — softmax probabilities, shape [n_classes]
    /// `expected`  — one-hot (or soft) target distribution, shape [n_classes]
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .filter(|(_, e)| **e != 0.0)
            .map(|(p, e)| -e * p.ln())
            .sum()
    }

    /// Gradient of the combined Softmax + cross-entropy w.r.t. the pre-softmax
    /// logits:
    ///   ∂L/∂z_i = predicted[i] - expected[i]
    pub fn derivative(predicted: &[f64], expected: &[f64], out: &mut [f64]) {
        for ((d, p), e) in out.iter_mut().zip(predicted).zip(expected) {
            *d = p - e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_loss_is_negative_log_of_true_class() {
        let p = [0.25, 0.5, 0.25];
        let y = [0.0, 1.0, 0.0];
        assert!((CrossEntropyLoss::loss(&p, &y) - 2f64.ln()).abs() < 1e-12);

        let mut d = [0.0; 3];
        CrossEntropyLoss::derivative(&p, &y, &mut d);
        assert_eq!(d, [0.25, -0.5, 0.25]);
    }

    #[test]
    fn zero_probability_on_true_class_is_infinite() {
        assert_eq!(CrossEntropyLoss::loss(&[1.0, 0.0], &[0.0, 1.0]), f64::INFINITY);
    }
}
