//! Error types for the conversion pipeline
//!
//! Every failure is terminal for the request that raised it: the pipeline never
//! emits a partial interface.

use thiserror::Error;

/// Result alias used across the crate
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Source text is not syntactically valid TypeScript
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// 1-based line of the first error node
        line: usize,
        /// 1-based column of the first error node
        column: usize,
        message: String,
    },

    /// The requested class is not declared in the file
    #[error("class '{name}' not found (available: {})", format_available(.available))]
    ClassNotFound { name: String, available: Vec<String> },

    /// A generic parameter expression has no usable name before `=` / `extends`
    #[error("malformed generic expression: '{expression}'")]
    MalformedGenericExpression { expression: String },

    /// tree-sitter refused to load the grammar (ABI/version mismatch)
    #[error("failed to load grammar: {0}")]
    Grammar(String),
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_not_found_lists_candidates() {
        let err = ConvertError::ClassNotFound {
            name: "Missing".to_string(),
            available: vec!["Box".to_string(), "Queue".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "class 'Missing' not found (available: Box, Queue)"
        );

        let empty = ConvertError::ClassNotFound {
            name: "Missing".to_string(),
            available: Vec::new(),
        };
        assert_eq!(empty.to_string(), "class 'Missing' not found (available: none)");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ConvertError::Parse {
            line: 3,
            column: 7,
            message: "unexpected token".to_string(),
        };
        assert_eq!(err.to_string(), "parse error at 3:7: unexpected token");
    }
}
