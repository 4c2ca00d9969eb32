//! Method, parameter and type-parameter extraction
//!
//! This module handles class methods (concrete, abstract and overload signatures),
//! their formal parameters, constructor parameter properties and generic
//! parameter lists shared with class declarations.

use super::helpers;
use crate::extractors::base::{MethodMember, Parameter, PropertyMember};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Extract a method from `method_definition`, `method_signature` or `abstract_method_signature`
///
/// Returns `None` for members without a usable name (ECMAScript private names).
pub(super) fn extract_method(extractor: &TypeScriptExtractor, node: Node) -> Option<MethodMember> {
    let name_node = node.child_by_field_name("name")?;
    if helpers::is_private_name(name_node) {
        return None;
    }
    let name = extractor.base().get_node_text(&name_node);

    Some(MethodMember {
        name,
        visibility: extractor.base().extract_visibility(&node),
        is_static: helpers::is_static(node),
        is_abstract: node.kind() == "abstract_method_signature"
            || helpers::has_modifier(node, "abstract"),
        is_optional: helpers::has_modifier(node, "?"),
        is_async: helpers::has_modifier(node, "async"),
        type_parameters: extract_type_parameters(extractor, &node),
        parameters: extract_parameters(extractor, &node),
        return_type: extractor.base().get_annotation_type(&node, "return_type"),
    })
}

/// Extract type parameters (e.g. `<T, U extends string>`) as raw text per parameter
pub(super) fn extract_type_parameters(extractor: &TypeScriptExtractor, node: &Node) -> Vec<String> {
    if let Some(type_params) = node.child_by_field_name("type_parameters") {
        let mut params = Vec::new();
        let mut cursor = type_params.walk();
        for child in type_params.children(&mut cursor) {
            if child.kind() == "type_parameter" {
                params.push(extractor.base().get_node_text(&child).trim().to_string());
            }
        }
        params
    } else {
        Vec::new()
    }
}

/// Extract formal parameters with their declared types
pub(super) fn extract_parameters(extractor: &TypeScriptExtractor, node: &Node) -> Vec<Parameter> {
    formal_parameters(node)
        .into_iter()
        .map(|param| Parameter {
            name: parameter_name(extractor, &param),
            type_expr: extractor.base().get_annotation_type(&param, "type"),
            is_optional: param.kind() == "optional_parameter"
                || param.child_by_field_name("value").is_some(),
        })
        .collect()
}

/// Extract constructor parameter properties (`constructor(private x: T)`)
///
/// Only parameters carrying an accessibility modifier or `readonly` declare a property.
pub(super) fn extract_parameter_properties(
    extractor: &TypeScriptExtractor,
    constructor: &Node,
) -> Vec<PropertyMember> {
    formal_parameters(constructor)
        .into_iter()
        .filter_map(|param| {
            let visibility = extractor.base().extract_visibility(&param);
            let is_readonly = helpers::has_modifier(param, "readonly");
            if visibility.is_none() && !is_readonly {
                return None;
            }

            Some(PropertyMember {
                name: parameter_name(extractor, &param),
                type_expr: extractor.base().get_annotation_type(&param, "type"),
                visibility,
                is_optional: param.kind() == "optional_parameter",
                is_static: false,
                is_readonly,
            })
        })
        .collect()
}

fn formal_parameters<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut cursor = params.walk();
    let nodes = params
        .children(&mut cursor)
        .filter(|child| matches!(child.kind(), "required_parameter" | "optional_parameter"))
        .collect();
    nodes
}

fn parameter_name(extractor: &TypeScriptExtractor, param: &Node) -> String {
    extractor
        .base()
        .get_field_text(param, "pattern")
        .unwrap_or_else(|| "arg".to_string())
}
