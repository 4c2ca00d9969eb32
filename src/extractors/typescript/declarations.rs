//! Top-level declaration routing
//!
//! This module walks the program's top-level statements and routes each node kind
//! to the specialized extractor. Wrappers (`export`, `declare`) are unwrapped;
//! nested scopes (namespaces, function bodies) are not visited.

use super::{classes, imports, interfaces};
use crate::extractors::base::{Declaration, DeclarationTree};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::{Node, Tree};

/// Extract imports and declarations from the syntax tree
pub(super) fn extract_declarations(extractor: &TypeScriptExtractor, tree: &Tree) -> DeclarationTree {
    let mut result = DeclarationTree::default();
    let root = tree.root_node();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        visit_top_level(extractor, child, &mut result);
    }
    result
}

/// Route one top-level node to the appropriate extraction module
fn visit_top_level(extractor: &TypeScriptExtractor, node: Node, result: &mut DeclarationTree) {
    let declaration = match node.kind() {
        // `class` covers `export default class Foo {}` parsed as a class expression
        "class_declaration" | "abstract_class_declaration" | "class" => {
            classes::extract_class(extractor, node).map(Declaration::Class)
        }
        "interface_declaration" => {
            interfaces::extract_interface(extractor, node).map(Declaration::Interface)
        }
        "type_alias_declaration" => {
            interfaces::extract_type_alias(extractor, node).map(Declaration::TypeAlias)
        }
        "enum_declaration" => interfaces::extract_enum(extractor, node).map(Declaration::Enum),
        "import_statement" => {
            result.imports.extend(imports::extract_import(extractor, node));
            None
        }
        "export_statement" => {
            if let Some(inner) = node
                .child_by_field_name("declaration")
                .or_else(|| node.child_by_field_name("value"))
            {
                visit_top_level(extractor, inner, result);
            }
            None
        }
        "ambient_declaration" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                visit_top_level(extractor, child, result);
            }
            None
        }
        _ => None,
    };

    if let Some(declaration) = declaration {
        result.declarations.push(declaration);
    }
}
