//! Language Support - Shared tree-sitter language configuration
//!
//! This module provides centralized grammar selection for the two TypeScript dialects
//! the converter understands.

use serde::{Deserialize, Serialize};

/// TypeScript flavour of the source text
///
/// The caller decides the dialect; the engine never sniffs file extensions or content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    TypeScript,
    Tsx,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::TypeScript => write!(f, "typescript"),
            Dialect::Tsx => write!(f, "tsx"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typescript" | "ts" => Ok(Dialect::TypeScript),
            "tsx" => Ok(Dialect::Tsx),
            _ => Err(format!(
                "Unsupported dialect: '{}'. Supported dialects: typescript, tsx",
                s
            )),
        }
    }
}

/// Get tree-sitter language parser for a dialect
///
/// This is the SINGLE SOURCE OF TRUTH for grammar selection.
pub fn get_tree_sitter_language(dialect: Dialect) -> tree_sitter::Language {
    match dialect {
        Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    #[test]
    fn test_both_dialects_load() {
        for dialect in [Dialect::TypeScript, Dialect::Tsx] {
            let mut parser = Parser::new();
            parser
                .set_language(&get_tree_sitter_language(dialect))
                .unwrap();
            let tree = parser.parse("class A {}", None).unwrap();
            assert!(!tree.root_node().has_error(), "{} failed", dialect);
        }
    }

    #[test]
    fn test_dialect_round_trips_through_str() {
        assert_eq!("typescript".parse::<Dialect>().unwrap(), Dialect::TypeScript);
        assert_eq!("ts".parse::<Dialect>().unwrap(), Dialect::TypeScript);
        assert_eq!("tsx".parse::<Dialect>().unwrap(), Dialect::Tsx);
        assert!("javascript".parse::<Dialect>().is_err());
        assert_eq!(Dialect::Tsx.to_string(), "tsx");
    }
}
