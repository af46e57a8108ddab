use crate::activation::sigmoid;
use crate::error::{check_len, Result};
use crate::network::network::Mlp;

impl Mlp {
    /// Forward pass; stores every intermediate activation for backprop and
    /// returns the network output.
    ///
    /// The hidden layer is always sigmoid; the output layer uses the
    /// network's [`OutputActivation`](crate::activation::OutputActivation).
    ///
    /// Fails with `DimensionMismatch` if `input` does not have one entry per
    /// input unit.
    pub fn forward(&mut self, input: &[f64]) -> Result<&[f64]> {
        check_len("input", self.topology.input, input.len())?;

        self.w1.vec_mul(input, &mut self.hidden_pre);
        for (h, &z) in self.hidden.iter_mut().zip(&self.hidden_pre) {
            *h = sigmoid(z);
        }

        self.w2.vec_mul(&self.hidden, &mut self.output_pre);
        self.output_activation.activate(&self.output_pre, &mut self.output);

        Ok(self.output.as_slice())
    }

    /// Runs a forward pass and returns an owned copy of the output.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input).map(|out| out.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::activation::{sigmoid, OutputActivation};
    use crate::error::MlpError;
    use crate::math::Matrix;
    use crate::network::{Mlp, Topology};
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed(kind: OutputActivation) -> Mlp {
        let mut rng = StdRng::seed_from_u64(0);
        let mut net = Mlp::new(Topology { input: 2, hidden: 2, output: 2 }, kind, &mut rng).unwrap();
        net.w1 = Matrix::from_data(vec![vec![1.0, -1.0], vec![0.5, 2.0]]);
        net.w2 = Matrix::from_data(vec![vec![1.0, 0.0], vec![-1.0, 3.0]]);
        net
    }

    #[test]
    fn linear_output_matches_hand_computation() {
        let mut net = fixed(OutputActivation::Linear);
        let out = net.predict(&[1.0, 2.0]).unwrap();

        let h0 = sigmoid(1.0 * 1.0 + 2.0 * 0.5);
        let h1 = sigmoid(-1.0 + 2.0 * 2.0);
        assert!((out[0] - (h0 - h1)).abs() < 1e-12);
        assert!((out[1] - 3.0 * h1).abs() < 1e-12);
        assert_eq!(net.hidden_pre, vec![2.0, 3.0]);
    }

    #[test]
    fn sigmoid_output_is_squashed_pre_activation() {
        let mut net = fixed(OutputActivation::Sigmoid);
        net.forward(&[0.3, -0.7]).unwrap();
        for (y, z) in net.output.iter().zip(&net.output_pre) {
            assert!((y - sigmoid(*z)).abs() < 1e-15);
        }
    }

    #[test]
    fn softmax_outputs_form_a_distribution() {
        let mut rng = StdRng::seed_from_u64(11);
        let topology = Topology { input: 16, hidden: 40, output: 26 };
        let mut net = Mlp::new(topology, OutputActivation::Softmax, &mut rng).unwrap();
        let input: Vec<f64> = (0..16).map(|i| i as f64 / 15.0).collect();
        let out = net.forward(&input).unwrap();
        assert_eq!(out.len(), 26);
        assert!(out.iter().all(|&p| p >= 0.0));
        assert!((out.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn wrong_input_length_is_rejected() {
        let mut net = fixed(OutputActivation::Linear);
        let err = net.forward(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            MlpError::DimensionMismatch { what: "input", expected: 2, got: 3 }
        ));
    }
}
