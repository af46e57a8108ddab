pub mod example;
pub mod synthetic;
pub mod letters;
pub mod split;

pub use example::TrainingExample;
pub use letters::{letter_index, load_letters, one_hot, parse_letter_line, parse_letters};
pub use split::split_at_fraction;
pub use synthetic::{sine_dataset, sine_target, xor_table};
