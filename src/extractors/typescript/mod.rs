//! TypeScript declaration extractor with modular architecture
//!
//! This module turns a tree-sitter TypeScript/TSX tree into an owned
//! [`DeclarationTree`]. The architecture is organized into specialized modules:
//!
//! - **declarations**: Top-level routing and `export`/`declare` unwrapping
//! - **classes**: Class extraction and member assembly (fields, accessors, overloads)
//! - **functions**: Methods, parameters, constructor parameter properties, type parameters
//! - **interfaces**: Interface, type alias and enum names
//! - **imports**: Import statements
//! - **helpers**: Modifier inspection utilities

mod classes;
mod declarations;
mod functions;
mod helpers;
mod imports;
mod interfaces;

use crate::extractors::base::{BaseExtractor, DeclarationTree};
use tree_sitter::Tree;

/// Main TypeScript extractor that orchestrates modular extraction components
pub struct TypeScriptExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> TypeScriptExtractor<'a> {
    /// Create a new TypeScript extractor over the text the tree was parsed from
    pub fn new(content: &'a str) -> Self {
        Self {
            base: BaseExtractor::new(content),
        }
    }

    /// Extract imports and top-level declarations from the syntax tree
    pub fn extract_declarations(&self, tree: &Tree) -> DeclarationTree {
        declarations::extract_declarations(self, tree)
    }

    /// Get immutable reference to base extractor (for sub-modules)
    pub(crate) fn base(&self) -> &BaseExtractor<'a> {
        &self.base
    }
}

#[cfg(test)]
mod tests;
