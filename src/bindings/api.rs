// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for the class-to-interface converter.

use super::PyConvertResult;
use crate::config::ConverterConfig;
use crate::converter::Converter;
use anyhow::Context;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Build a converter from an optional JSON configuration string
fn converter_from_json(config_json: Option<&str>) -> anyhow::Result<Converter> {
    let config = match config_json {
        Some(json) => ConverterConfig::from_json(json).context("Invalid converter config")?,
        None => ConverterConfig::default(),
    };
    Ok(Converter::new(config))
}

/// Convert one class of a TypeScript source file into an interface
///
/// Args:
///     content (str): TypeScript source text
///     class_name (str): Name of the class to convert
///     config (str, optional): JSON converter configuration
///
/// Returns:
///     str: Interface declaration text
///
/// Raises:
///     ValueError: If the source does not parse or the class is not declared
#[pyfunction]
#[pyo3(signature = (content, class_name, config = None))]
pub fn convert(content: &str, class_name: &str, config: Option<&str>) -> PyResult<String> {
    let converter = converter_from_json(config)?;
    converter
        .convert(content, class_name)
        .map_err(|e| PyValueError::new_err(format!("Conversion failed: {}", e)))
}

/// List every class declared in a TypeScript source file
///
/// Args:
///     content (str): TypeScript source text
///     config (str, optional): JSON converter configuration
///
/// Returns:
///     list[str]: Class names in source order
#[pyfunction]
#[pyo3(signature = (content, config = None))]
pub fn list_class_names(content: &str, config: Option<&str>) -> PyResult<Vec<String>> {
    let converter = converter_from_json(config)?;
    converter
        .list_class_names(content)
        .map_err(|e| PyValueError::new_err(format!("Parse failed: {}", e)))
}

/// Convert many classes in parallel
///
/// Releases the GIL and converts every request on Rayon's worker pool.
/// A failing request does not fail the batch: its ConvertResult carries the error.
///
/// Args:
///     requests (list[tuple[str, str]]): List of (content, class_name) tuples
///     config (str, optional): JSON converter configuration
///
/// Returns:
///     list[ConvertResult]: Results in the same order as input
#[pyfunction]
#[pyo3(signature = (requests, config = None))]
pub fn convert_batch(
    py: Python<'_>,
    requests: Vec<(String, String)>,
    config: Option<&str>,
) -> PyResult<Vec<PyConvertResult>> {
    let converter = converter_from_json(config)?;

    // Release GIL for parallel processing
    let results = py.detach(move || {
        let outcomes = converter.convert_batch(&requests);
        requests
            .into_iter()
            .zip(outcomes)
            .map(|((_, class_name), outcome)| PyConvertResult::from_result(class_name, outcome))
            .collect::<Vec<_>>()
    });

    Ok(results)
}

/// Describe the declarations of a TypeScript source file as JSON
///
/// Args:
///     content (str): TypeScript source text
///     config (str, optional): JSON converter configuration
///
/// Returns:
///     str: JSON object with `imports` and `declarations`
#[pyfunction]
#[pyo3(signature = (content, config = None))]
pub fn describe_file(content: &str, config: Option<&str>) -> PyResult<String> {
    let converter = converter_from_json(config)?;
    let source = converter
        .parse(content)
        .map_err(|e| PyValueError::new_err(format!("Parse failed: {}", e)))?;
    let json = serde_json::to_string(source.declarations())
        .context("Failed to serialize declaration tree")?;
    Ok(json)
}
