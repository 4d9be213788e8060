//! Predictors turn an image path into a diagnosis
//!
//! Only [`StubPredictor`] exists today. A model-backed implementation plugs
//! in behind the same [`Predictor`] trait.

pub mod stub;

pub use stub::StubPredictor;

use std::io::Write;
use std::path::Path;

use crate::diagnosis::DiagnosticRecord;
use crate::errors::Result;
use crate::output;

/// Produces a diagnosis for a leaf image
pub trait Predictor {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Diagnose the image at `image_path`
    fn predict(&self, image_path: &Path) -> Result<DiagnosticRecord>;
}

/// The predictor the binary uses
pub fn default_predictor() -> Box<dyn Predictor> {
    Box::new(StubPredictor::new())
}

/// Predict, render and write exactly one JSON line to `out`
pub fn run<W: Write>(predictor: &dyn Predictor, image_path: &Path, out: &mut W) -> Result<()> {
    tracing::debug!(predictor = predictor.name(), path = %image_path.display(), "predicting");

    let record = predictor.predict(image_path)?;
    record.validate()?;

    let line = output::to_json_line(&record)?;
    out.write_all(line.as_bytes())?;
    out.flush()?;

    tracing::debug!(disease = %record.disease, "diagnosis written");
    Ok(())
}
