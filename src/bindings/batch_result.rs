// PyConvertResult - Container for one batch conversion request
//
// Batch conversion never raises for a single failing request. Each request
// gets its own result carrying either the interface text or the error message.

use crate::error::{ConvertError, ConvertResult};
use pyo3::prelude::*;

/// Result of converting a single class in batch conversion.
///
/// - class_name: Requested class (same as input)
/// - interface: Interface text (None if conversion failed)
/// - error: Error message if conversion failed
/// - available: Classes declared in the file, filled when the class was not found
#[pyclass(name = "ConvertResult")]
pub struct PyConvertResult {
    #[pyo3(get)]
    pub class_name: String,

    #[pyo3(get)]
    pub interface: Option<String>,

    #[pyo3(get)]
    pub error: Option<String>,

    #[pyo3(get)]
    pub available: Vec<String>,
}

impl PyConvertResult {
    pub fn from_result(class_name: String, result: ConvertResult<String>) -> Self {
        match result {
            Ok(interface) => Self::success(class_name, interface),
            Err(err) => Self::error(class_name, err),
        }
    }

    /// Create a successful result with interface text
    pub fn success(class_name: String, interface: String) -> Self {
        PyConvertResult {
            class_name,
            interface: Some(interface),
            error: None,
            available: Vec::new(),
        }
    }

    /// Create a failed result from a conversion error
    pub fn error(class_name: String, error: ConvertError) -> Self {
        let available = match &error {
            ConvertError::ClassNotFound { available, .. } => available.clone(),
            _ => Vec::new(),
        };
        PyConvertResult {
            class_name,
            interface: None,
            error: Some(error.to_string()),
            available,
        }
    }
}

#[pymethods]
impl PyConvertResult {
    /// Check if this result represents a successful conversion
    #[getter]
    fn is_success(&self) -> bool {
        self.error.is_none() && self.interface.is_some()
    }

    fn __repr__(&self) -> String {
        if let Some(ref err) = self.error {
            format!("ConvertResult(class_name={:?}, error={:?})", self.class_name, err)
        } else {
            format!(
                "ConvertResult(class_name={:?}, lines={})",
                self.class_name,
                self.interface.as_deref().map_or(0, |text| text.lines().count())
            )
        }
    }
}
