use log::trace;
use rand::Rng;

use crate::activation::OutputActivation;
use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::topology::Topology;
use crate::optim::sgd::Sgd;

/// A one-hidden-layer perceptron together with its training state.
///
/// Besides the two weight matrices the network owns one gradient accumulator
/// per matrix and one set of activation buffers. The buffers hold the values
/// of the most recent [`forward`](Mlp::forward) call and are what
/// [`backward`](Mlp::backward) differentiates, so an instance must see
/// `forward(x)` then `backward(x, t)` for the same `x` with nothing in
/// between. Gradients are summed across `backward` calls until
/// [`update_weights`](Mlp::update_weights) applies and clears them.
///
/// Independent instances share nothing and can be trained on separate
/// threads; a single instance is not meant to be shared.
#[derive(Debug, Clone)]
pub struct Mlp {
    pub(crate) topology: Topology,
    pub(crate) output_activation: OutputActivation,

    /// input × hidden
    pub(crate) w1: Matrix,
    /// hidden × output
    pub(crate) w2: Matrix,
    pub(crate) dw1: Matrix,
    pub(crate) dw2: Matrix,

    pub(crate) hidden_pre: Vec<f64>,
    pub(crate) hidden: Vec<f64>,
    pub(crate) output_pre: Vec<f64>,
    pub(crate) output: Vec<f64>,

    // scratch space reused by every backward call
    pub(crate) output_delta: Vec<f64>,
    pub(crate) hidden_delta: Vec<f64>,
}

impl Mlp {
    /// Builds a network with weights drawn from U[-1, 1) and zeroed
    /// gradient accumulators.
    ///
    /// Fails with `InvalidTopology` if any layer size is zero.
    pub fn new<R: Rng + ?Sized>(
        topology: Topology,
        output_activation: OutputActivation,
        rng: &mut R,
    ) -> Result<Mlp> {
        topology.validate()?;
        let Topology { input, hidden, output } = topology;

        let w1 = Matrix::random(input, hidden, rng);
        let w2 = Matrix::random(hidden, output, rng);
        trace!(
            "initialised {input}-{hidden}-{output} network ({} weights, {output_activation})",
            topology.weight_count()
        );

        Ok(Mlp {
            topology,
            output_activation,
            w1,
            w2,
            dw1: Matrix::zeros(input, hidden),
            dw2: Matrix::zeros(hidden, output),
            hidden_pre: vec![0.0; hidden],
            hidden: vec![0.0; hidden],
            output_pre: vec![0.0; output],
            output: vec![0.0; output],
            output_delta: vec![0.0; output],
            hidden_delta: vec![0.0; hidden],
        })
    }

    /// Re-draws every weight from U[-1, 1) and clears both accumulators.
    pub fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.w1.fill_uniform(rng);
        self.w2.fill_uniform(rng);
        self.dw1.fill_zero();
        self.dw2.fill_zero();
    }

    /// Applies `w -= learning_rate * dw` to both layers, then zeroes the
    /// accumulators.
    ///
    /// The accumulated gradient is a plain sum over the examples seen since
    /// the last update, so the effective step grows with the batch size.
    /// A non-positive or non-finite rate is accepted but gives meaningless
    /// training.
    pub fn update_weights(&mut self, learning_rate: f64) {
        Sgd::new(learning_rate).step(self);
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn output_activation(&self) -> OutputActivation {
        self.output_activation
    }

    /// Input-to-hidden weights, `input × hidden`.
    pub fn input_weights(&self) -> &Matrix {
        &self.w1
    }

    /// Hidden-to-output weights, `hidden × output`.
    pub fn output_weights(&self) -> &Matrix {
        &self.w2
    }

    /// Gradient accumulators for `(input_weights, output_weights)`.
    pub fn gradients(&self) -> (&Matrix, &Matrix) {
        (&self.dw1, &self.dw2)
    }

    /// Hidden-layer activations from the last forward call.
    pub fn hidden_activations(&self) -> &[f64] {
        &self.hidden
    }

    /// Network output from the last forward call.
    pub fn output(&self) -> &[f64] {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MlpError;
    use rand::{rngs::StdRng, SeedableRng};

    fn topo(i: usize, h: usize, o: usize) -> Topology {
        Topology { input: i, hidden: h, output: o }
    }

    #[test]
    fn construction_allocates_shapes_and_zero_gradients() {
        let mut rng = StdRng::seed_from_u64(1);
        let net = Mlp::new(topo(16, 40, 26), OutputActivation::Softmax, &mut rng).unwrap();
        assert_eq!((net.w1.rows, net.w1.cols), (16, 40));
        assert_eq!((net.w2.rows, net.w2.cols), (40, 26));
        assert_eq!(net.w1.rows * net.w1.cols + net.w2.rows * net.w2.cols, net.topology().weight_count());
        let (g1, g2) = net.gradients();
        assert!(g1.is_zero() && g2.is_zero());
        assert_eq!(net.hidden_activations().len(), 40);
        assert_eq!(net.output().len(), 26);
    }

    #[test]
    fn zero_sized_layer_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Mlp::new(topo(2, 0, 1), OutputActivation::Linear, &mut rng).unwrap_err();
        assert!(matches!(err, MlpError::InvalidTopology { hidden: 0, .. }));
    }

    #[test]
    fn randomise_redraws_weights_and_clears_gradients() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut net = Mlp::new(topo(2, 3, 1), OutputActivation::Linear, &mut rng).unwrap();
        let before = net.w1.clone();
        net.forward(&[1.0, 1.0]).unwrap();
        net.backward(&[1.0, 1.0], &[5.0]).unwrap();
        assert!(!net.dw1.is_zero());

        net.randomise(&mut rng);
        assert_ne!(net.w1, before);
        assert!(net.dw1.is_zero() && net.dw2.is_zero());
    }
}
