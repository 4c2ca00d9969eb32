// PyO3 Bindings Module
//
// This module exposes the converter to Python. Conversion results cross the
// boundary as plain strings or PyConvertResult containers.

mod api;
mod batch_result;

// Re-export for lib.rs
pub use api::{convert, convert_batch, describe_file, list_class_names};
pub use batch_result::PyConvertResult;
