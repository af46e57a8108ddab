pub mod squared_error;
pub mod cross_entropy;

pub use squared_error::SquaredErrorLoss;
pub use cross_entropy::CrossEntropyLoss;
