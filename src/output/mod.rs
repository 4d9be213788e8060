//! JSON rendering for diagnoses
//!
//! Callers parse stdout line by line, and they expect the `json.dumps` layout
//! (`{"disease": "...", "solution": "..."}`), spaces included.

pub mod formatter;

pub use formatter::PythonCompatFormatter;

use serde::Serialize;

use crate::errors::{PredictError, Result};

/// Serialize a value on one line with Python-compatible separators
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PythonCompatFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| PredictError::Generic(format!("non-UTF-8 JSON: {}", e)))
}

/// Same as [`to_json_string`], newline-terminated
pub fn to_json_line<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut line = to_json_string(value)?;
    line.push('\n');
    Ok(line)
}
