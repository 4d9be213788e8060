//! Placeholder predictor returning a fixed diagnosis

use std::path::Path;

use super::Predictor;
use crate::diagnosis::DiagnosticRecord;
use crate::errors::Result;

/// Returns Leaf Blight for every input.
///
/// The path is never opened, read or checked for existence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPredictor;

impl StubPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl Predictor for StubPredictor {
    fn name(&self) -> &str {
        "stub"
    }

    fn predict(&self, _image_path: &Path) -> Result<DiagnosticRecord> {
        // TODO: replace with an image classifier once a trained model is available
        Ok(DiagnosticRecord::leaf_blight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_path_value() {
        let stub = StubPredictor::new();
        let paths = ["a.jpg", "/nonexistent/path.png", "not-a-path-at-all", ""];
        for path in paths {
            assert_eq!(
                stub.predict(Path::new(path)).unwrap(),
                DiagnosticRecord::leaf_blight()
            );
        }
    }

    #[test]
    fn test_does_not_read_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("leaf.jpg");
        std::fs::write(&garbage, b"definitely not a jpeg").unwrap();

        let stub = StubPredictor::new();
        assert_eq!(
            stub.predict(&garbage).unwrap(),
            stub.predict(&dir.path().join("missing.jpg")).unwrap()
        );
    }

    #[test]
    fn test_directory_path_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StubPredictor::new().predict(dir.path()).is_ok());
    }
}
