use std::fmt;

/// Errors produced by the network, the dataset loaders and the report writer.
#[derive(Debug)]
pub enum MlpError {
    /// One of the layer sizes was zero.
    InvalidTopology {
        input: usize,
        hidden: usize,
        output: usize,
    },

    /// A vector did not have the length the topology requires.
    DimensionMismatch {
        /// What was being checked (e.g. "input", "target").
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A dataset line could not be turned into a training example.
    DatasetParse {
        /// 1-based line number in the source file.
        line: usize,
        reason: String,
    },

    /// An experiment configuration failed validation.
    InvalidConfig(String),

    Io(std::io::Error),
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MlpError>;

impl fmt::Display for MlpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlpError::InvalidTopology { input, hidden, output } => write!(
                f,
                "invalid topology {input}-{hidden}-{output}: every layer needs at least one unit"
            ),
            MlpError::DimensionMismatch { what, expected, got } => {
                write!(f, "dimension mismatch for {what}: got {got}, expected {expected}")
            }
            MlpError::DatasetParse { line, reason } => {
                write!(f, "dataset parse error on line {line}: {reason}")
            }
            MlpError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            MlpError::Io(e) => write!(f, "i/o error: {e}"),
            MlpError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for MlpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MlpError::Io(e) => Some(e),
            MlpError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MlpError {
    fn from(e: std::io::Error) -> Self {
        MlpError::Io(e)
    }
}

impl From<serde_json::Error> for MlpError {
    fn from(e: serde_json::Error) -> Self {
        MlpError::Json(e)
    }
}

/// Fails with `DimensionMismatch` unless `got == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(MlpError::DimensionMismatch { what, expected, got })
    }
}
