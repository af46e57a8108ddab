use std::f64::consts::E;

/// Logistic sigmoid, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its *output* `y = sigmoid(x)`:
/// `y * (1 - y)`.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Numerically stabilised softmax: the maximum logit is subtracted before
/// exponentiating, so large logits do not overflow.
///
/// Writes the distribution into `out`, which must have the same length as `z`.
pub fn softmax(z: &[f64], out: &mut [f64]) {
    debug_assert_eq!(z.len(), out.len());
    let max = z.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut sum = 0.0;
    for (o, &zi) in out.iter_mut().zip(z) {
        *o = (zi - max).exp();
        sum += *o;
    }
    for o in out.iter_mut() {
        *o /= sum;
    }
}
