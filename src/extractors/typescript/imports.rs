//! Import statement extraction
//!
//! This module handles default, namespace, named and `require` imports. Only the
//! locally bound names are kept; module specifiers are irrelevant to the symbol table.

use crate::extractors::base::{Import, ImportSpecifier};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Extract an import statement
///
/// `import D, * as ns from "m"` binds two names and yields two imports
/// (a named import carrying the default alias, then the namespace import).
pub(super) fn extract_import(extractor: &TypeScriptExtractor, node: Node) -> Vec<Import> {
    let mut imports = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "import_clause" => extract_import_clause(extractor, child, &mut imports),
            // import fs = require("fs")
            "import_require_clause" => {
                if let Some(identifier) = extractor.base().find_child_by_type(&child, "identifier") {
                    imports.push(Import::Named {
                        default_alias: Some(extractor.base().get_node_text(&identifier)),
                        specifiers: Vec::new(),
                    });
                }
            }
            _ => {}
        }
    }
    imports
}

fn extract_import_clause(extractor: &TypeScriptExtractor, clause: Node, imports: &mut Vec<Import>) {
    let mut default_alias = None;
    let mut specifiers = None;
    let mut namespace = None;

    let mut cursor = clause.walk();
    for child in clause.children(&mut cursor) {
        match child.kind() {
            // Default import: import Foo from '...'
            "identifier" => default_alias = Some(extractor.base().get_node_text(&child)),
            "named_imports" => specifiers = Some(extract_named_imports(extractor, child)),
            "namespace_import" => {
                namespace = extractor
                    .base()
                    .find_child_by_type(&child, "identifier")
                    .map(|identifier| extractor.base().get_node_text(&identifier));
            }
            _ => {}
        }
    }

    if default_alias.is_some() || specifiers.is_some() {
        imports.push(Import::Named {
            default_alias,
            specifiers: specifiers.unwrap_or_default(),
        });
    }
    if let Some(alias) = namespace {
        imports.push(Import::Namespace { alias });
    }
}

fn extract_named_imports(extractor: &TypeScriptExtractor, node: Node) -> Vec<ImportSpecifier> {
    let mut specifiers = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "import_specifier" {
            continue;
        }
        if let Some(specifier) = extractor.base().get_field_text(&child, "name") {
            specifiers.push(ImportSpecifier {
                specifier,
                alias: extractor.base().get_field_text(&child, "alias"),
            });
        }
    }
    specifiers
}
