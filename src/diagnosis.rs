//! Diagnostic record emitted by a predictor

use serde::{Deserialize, Serialize};

use crate::errors::{PredictError, Result};

/// Disease name reported by the stub predictor
pub const LEAF_BLIGHT: &str = "Leaf Blight";

/// Remediation advice paired with [`LEAF_BLIGHT`]
pub const LEAF_BLIGHT_SOLUTION: &str =
    "Use copper-based fungicide, avoid waterlogging, and remove infected leaves.";

/// A disease name and its remediation advice.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Name of the condition
    pub disease: String,

    /// Free-text remediation advice
    pub solution: String,
}

impl DiagnosticRecord {
    /// The fixed Leaf Blight diagnosis
    pub fn leaf_blight() -> Self {
        Self {
            disease: LEAF_BLIGHT.to_string(),
            solution: LEAF_BLIGHT_SOLUTION.to_string(),
        }
    }

    /// Check that both fields carry text
    pub fn validate(&self) -> Result<()> {
        if self.disease.trim().is_empty() {
            return Err(PredictError::InvalidRecord("disease is empty".to_string()));
        }
        if self.solution.trim().is_empty() {
            return Err(PredictError::InvalidRecord("solution is empty".to_string()));
        }
        Ok(())
    }
}
