use crate::network::network::Mlp;

/// Plain gradient descent on the summed gradient of a batch.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies the accumulated gradients to both layers and resets the
    /// accumulators. With all-zero accumulators this leaves the weights as
    /// they are.
    pub fn step(&self, network: &mut Mlp) {
        network.w2.sub_scaled(&network.dw2, self.learning_rate);
        network.dw2.fill_zero();
        network.w1.sub_scaled(&network.dw1, self.learning_rate);
        network.dw1.fill_zero();
    }
}

#[cfg(test)]
mod tests {
    use crate::activation::OutputActivation;
    use crate::network::{Mlp, Topology};
    use rand::{rngs::StdRng, SeedableRng};

    fn net() -> Mlp {
        let mut rng = StdRng::seed_from_u64(21);
        Mlp::new(Topology { input: 2, hidden: 3, output: 1 }, OutputActivation::Linear, &mut rng).unwrap()
    }

    #[test]
    fn update_subtracts_scaled_gradient_and_resets() {
        let mut n = net();
        n.forward(&[1.0, -1.0]).unwrap();
        n.backward(&[1.0, -1.0], &[2.0]).unwrap();

        let mut expected = n.w1.clone();
        expected.sub_scaled(&n.dw1, 0.3);
        n.update_weights(0.3);

        assert_eq!(n.w1, expected);
        assert!(n.dw1.is_zero() && n.dw2.is_zero());
    }

    #[test]
    fn second_update_without_backward_is_a_no_op() {
        let mut n = net();
        n.forward(&[0.5, 0.5]).unwrap();
        n.backward(&[0.5, 0.5], &[0.0]).unwrap();
        n.update_weights(1.0);

        let (w1, w2) = (n.w1.clone(), n.w2.clone());
        n.update_weights(1.0);
        assert_eq!(n.w1, w1);
        assert_eq!(n.w2, w2);
    }

    #[test]
    fn batch_step_equals_sum_of_online_steps_from_the_same_weights() {
        let examples = [([0.2, 0.9], [1.0]), ([-0.4, 0.1], [0.0])];

        let mut batched = net();
        for (x, t) in &examples {
            batched.forward(x).unwrap();
            batched.backward(x, t).unwrap();
        }

        // Each example's step computed independently from the starting weights.
        let start = net();
        let mut expected = start.w1.clone();
        for (x, t) in &examples {
            let mut single = start.clone();
            single.forward(x).unwrap();
            single.backward(x, t).unwrap();
            expected.sub_scaled(&single.dw1, 0.5);
        }

        batched.update_weights(0.5);
        for (r, e) in batched.w1.data.iter().zip(&expected.data) {
            for (x, y) in r.iter().zip(e) {
                assert!((x - y).abs() < 1e-12);
            }
        }
    }
}
