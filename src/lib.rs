// Classface Core - tree-sitter powered TypeScript class-to-interface conversion
//
// The engine parses one TypeScript source file, resolves which type names are
// defined in it, and renders a chosen class as an interface declaration.
// Pipeline: source -> symbols -> classifier -> members -> render.

pub mod classifier;
pub mod config;
pub mod converter;
pub mod error;
pub mod extractors;
pub mod language;
pub mod members;
pub mod render;
pub mod source;
pub mod symbols;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use classifier::{TypeClassifier, TypeKind};
pub use config::ConverterConfig;
pub use converter::{convert, list_class_names, Converter};
pub use error::{ConvertError, ConvertResult};
pub use language::Dialect;
pub use source::SourceFile;
pub use symbols::{build_defined_types, SymbolTable};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Classface Core Python module
///
/// Provides class-to-interface conversion for TypeScript and TSX sources.
#[cfg(feature = "python")]
#[pymodule]
fn classface_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::convert, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::list_class_names, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::convert_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::describe_file, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyConvertResult>()?;

    Ok(())
}
