use rand::Rng;

use crate::data::example::TrainingExample;

/// The four rows of the exclusive-or truth table.
pub fn xor_table() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

/// `sin(x1 - x2 + x3 - x4)`
pub fn sine_target(x: &[f64; 4]) -> f64 {
    (x[0] - x[1] + x[2] - x[3]).sin()
}

/// `count` examples with inputs drawn from U[-1, 1)⁴ and target
/// `sin(x1 - x2 + x3 - x4)`.
pub fn sine_dataset<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<TrainingExample> {
    (0..count)
        .map(|_| {
            let mut x = [0.0; 4];
            for xi in x.iter_mut() {
                *xi = rng.gen::<f64>() * 2.0 - 1.0;
            }
            TrainingExample::new(x.to_vec(), vec![sine_target(&x)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn xor_targets_are_exclusive_or_of_inputs() {
        for ex in xor_table() {
            let a = ex.input[0] != 0.0;
            let b = ex.input[1] != 0.0;
            assert_eq!(ex.target[0] != 0.0, a ^ b);
        }
    }

    #[test]
    fn sine_dataset_is_seeded_and_bounded() {
        let a = sine_dataset(50, &mut StdRng::seed_from_u64(4));
        let b = sine_dataset(50, &mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
        for ex in &a {
            assert_eq!(ex.input.len(), 4);
            assert!(ex.input.iter().all(|x| (-1.0..1.0).contains(x)));
            let x = [ex.input[0], ex.input[1], ex.input[2], ex.input[3]];
            assert_eq!(ex.target, vec![sine_target(&x)]);
        }
    }
}
