//! Loader for the UCI letter-recognition data.
//!
//! Each line is `label,a1,...,a16` where `label` is an uppercase letter and
//! the attributes are integers in 0..=15. Attributes are scaled to [0, 1] by
//! dividing by 15 and the label becomes a one-hot vector of length 26.
//! Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, trace};

use crate::data::example::TrainingExample;
use crate::error::{MlpError, Result};

pub const LETTER_FEATURES: usize = 16;
pub const LETTER_CLASSES: usize = 26;
const FEATURE_SCALE: f64 = 15.0;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// `'A'..='Z'` → `0..=25`.
pub fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}

/// A vector of `classes` zeros with a single 1.0 at `index`.
///
/// # Panics
/// Panics if `index >= classes`.
pub fn one_hot(index: usize, classes: usize) -> Vec<f64> {
    assert!(index < classes, "class index {index} out of range for {classes} classes");
    let mut v = vec![0.0; classes];
    v[index] = 1.0;
    v
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses one data line. `line_no` is 1-based and only used in errors.
pub fn parse_letter_line(line: &str, line_no: usize) -> Result<TrainingExample> {
    let parse_err = |reason: String| MlpError::DatasetParse { line: line_no, reason };

    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    if cells.len() != LETTER_FEATURES + 1 {
        return Err(parse_err(format!(
            "expected {} columns (label + {} attributes), got {}",
            LETTER_FEATURES + 1,
            LETTER_FEATURES,
            cells.len()
        )));
    }

    let label = cells[0];
    let mut chars = label.chars();
    let class = match (chars.next(), chars.next()) {
        (Some(c), None) => letter_index(c),
        _ => None,
    }
    .ok_or_else(|| parse_err(format!("label '{label}' is not a letter A-Z")))?;

    let input = cells[1..]
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            cell.parse::<f64>()
                .map(|v| v / FEATURE_SCALE)
                .map_err(|_| parse_err(format!("attribute {} ('{}') is not a number", i + 1, cell)))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(TrainingExample::new(input, one_hot(class, LETTER_CLASSES)))
}

/// Parses every non-blank line of `reader`, stopping at the first bad line.
pub fn parse_letters<R: BufRead>(reader: R) -> Result<Vec<TrainingExample>> {
    let mut examples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            trace!("skipping blank line {}", idx + 1);
            continue;
        }
        examples.push(parse_letter_line(line, idx + 1)?);
    }
    Ok(examples)
}

pub fn load_letters<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let examples = parse_letters(BufReader::new(file))?;
    info!("loaded {} letter examples from {}", examples.len(), path.display());
    Ok(examples)
}
