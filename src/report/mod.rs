pub mod report;

pub use report::{ConfigSummary, ExperimentReport, Outcome};
