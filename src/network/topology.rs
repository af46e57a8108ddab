use serde::{Deserialize, Serialize};

use crate::error::{MlpError, Result};

/// Layer sizes of a one-hidden-layer perceptron. Fixed for the lifetime of a
/// network; every buffer and matrix dimension derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
}

impl Topology {
    /// Fails with `InvalidTopology` if any layer is empty.
    pub fn new(input: usize, hidden: usize, output: usize) -> Result<Topology> {
        let topology = Topology { input, hidden, output };
        topology.validate()?;
        Ok(topology)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input == 0 || self.hidden == 0 || self.output == 0 {
            return Err(MlpError::InvalidTopology {
                input: self.input,
                hidden: self.hidden,
                output: self.output,
            });
        }
        Ok(())
    }

    /// Total number of trainable weights (the network has no biases).
    pub fn weight_count(&self) -> usize {
        self.input * self.hidden + self.hidden * self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_layers() {
        for (i, h, o) in [(0, 4, 1), (2, 0, 1), (2, 4, 0)] {
            assert!(matches!(
                Topology::new(i, h, o),
                Err(MlpError::InvalidTopology { .. })
            ));
        }
        assert_eq!(Topology::new(16, 40, 26).unwrap().weight_count(), 16 * 40 + 40 * 26);
    }
}
