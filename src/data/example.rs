use serde::{Deserialize, Serialize};

/// An input vector paired with the output the network should produce for it.
/// Built once when a dataset is loaded or generated and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> TrainingExample {
        TrainingExample { input, target }
    }
}
