use crate::activation::sigmoid_derivative;
use crate::error::{check_len, Result};
use crate::network::network::Mlp;

impl Mlp {
    /// Backpropagates the error for one example and adds its gradient to the
    /// accumulators. Returns the loss for this example alone.
    ///
    /// Must directly follow `forward(input)` on this instance: the output
    /// and hidden activations of that call are reused, and calling in any
    /// other order silently produces stale gradients.
    ///
    /// Weights are not touched; see [`update_weights`](Mlp::update_weights).
    pub fn backward(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        check_len("input", self.topology.input, input.len())?;
        check_len("target", self.topology.output, target.len())?;

        let loss = self
            .output_activation
            .output_delta(&self.output, target, &mut self.output_delta);

        // δh = σ'(h) ⊙ (W2 · δo)
        let back = self.w2.mul_vec(&self.output_delta);
        for ((d, &h), b) in self.hidden_delta.iter_mut().zip(&self.hidden).zip(back) {
            *d = sigmoid_derivative(h) * b;
        }

        self.dw2.add_outer(&self.hidden, &self.output_delta);
        self.dw1.add_outer(input, &self.hidden_delta);

        Ok(loss)
    }
}
