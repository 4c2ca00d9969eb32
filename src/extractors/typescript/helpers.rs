//! Helper functions for TypeScript extractor
//!
//! This module provides utility functions for node inspection shared by the
//! class, member and import extractors.

use tree_sitter::Node;

/// Check if a node has a modifier child of the given kind
///
/// Useful for checking for 'async', 'static', 'abstract', 'readonly', '?', etc.
pub(super) fn has_modifier(node: Node, modifier_kind: &str) -> bool {
    node.children(&mut node.walk())
        .any(|child| child.kind() == modifier_kind)
}

/// Accessor flavour of a method-like node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AccessorKind {
    Get,
    Set,
}

/// Detect `get name()` / `set name(v)` accessors
pub(super) fn accessor_kind(node: Node) -> Option<AccessorKind> {
    if has_modifier(node, "get") || has_modifier(node, "static get") {
        Some(AccessorKind::Get)
    } else if has_modifier(node, "set") {
        Some(AccessorKind::Set)
    } else {
        None
    }
}

/// `static` keyword, including the `static get` token the grammar fuses
pub(super) fn is_static(node: Node) -> bool {
    has_modifier(node, "static") || has_modifier(node, "static get")
}

/// ECMAScript private names (`#secret`) are not part of a class's structural type
pub(super) fn is_private_name(name_node: Node) -> bool {
    name_node.kind() == "private_property_identifier"
}
