//! cropdoc - Plant disease predictor
//!
//! Takes a leaf image path and prints a JSON diagnosis with `disease` and
//! `solution` keys. The current predictor is a stub that returns the same
//! diagnosis for every image.

pub mod cli;
pub mod diagnosis;
pub mod errors;
pub mod output;
pub mod predictor;
pub mod telemetry;

// Re-export commonly used types
pub use diagnosis::DiagnosticRecord;
pub use errors::{PredictError, Result};
pub use predictor::{Predictor, StubPredictor};
