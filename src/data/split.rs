use crate::data::example::TrainingExample;
use crate::error::{MlpError, Result};

/// Splits off the first `floor(fraction * len)` examples as the training
/// set; the rest become the test set. Order is preserved.
pub fn split_at_fraction(
    mut examples: Vec<TrainingExample>,
    fraction: f64,
) -> Result<(Vec<TrainingExample>, Vec<TrainingExample>)> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(MlpError::InvalidConfig(format!(
            "train fraction must be in (0, 1), got {fraction}"
        )));
    }
    let cut = (fraction * examples.len() as f64) as usize;
    let test = examples.split_off(cut);
    Ok((examples, test))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<TrainingExample> {
        (0..n).map(|i| TrainingExample::new(vec![i as f64], vec![0.0])).collect()
    }

    #[test]
    fn splits_eighty_twenty_in_order() {
        let (train, test) = split_at_fraction(numbered(500), 0.8).unwrap();
        assert_eq!((train.len(), test.len()), (400, 100));
        assert_eq!(test[0].input, vec![400.0]);
    }

    #[test]
    fn rounds_training_size_down() {
        let (train, test) = split_at_fraction(numbered(7), 0.5).unwrap();
        assert_eq!((train.len(), test.len()), (3, 4));
    }

    #[test]
    fn rejects_degenerate_fractions() {
        for f in [0.0, 1.0, -0.2, f64::NAN] {
            assert!(split_at_fraction(numbered(4), f).is_err());
        }
    }
}
