//! Interface, type alias and enum extraction
//!
//! Only the declared name matters for these constructs: they feed the symbol
//! table, never the rendered interface.

use crate::extractors::base::{EnumDecl, InterfaceDecl, TypeAliasDecl};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Extract an interface declaration
pub(super) fn extract_interface(extractor: &TypeScriptExtractor, node: Node) -> Option<InterfaceDecl> {
    let name = extractor.base().get_name(&node)?;
    Some(InterfaceDecl { name })
}

/// Extract a type alias declaration
pub(super) fn extract_type_alias(extractor: &TypeScriptExtractor, node: Node) -> Option<TypeAliasDecl> {
    let name = extractor.base().get_name(&node)?;
    Some(TypeAliasDecl { name })
}

/// Extract an enum declaration
pub(super) fn extract_enum(extractor: &TypeScriptExtractor, node: Node) -> Option<EnumDecl> {
    let name = extractor.base().get_name(&node)?;
    Some(EnumDecl { name })
}
