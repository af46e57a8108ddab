pub mod activation;
pub mod output;

pub use activation::{sigmoid, sigmoid_derivative, softmax};
pub use output::OutputActivation;
