//! Class extraction
//!
//! This module handles class declarations (plain, abstract, exported and ambient)
//! and assembles their member lists:
//!
//! - fields become properties
//! - `get`/`set` accessor pairs collapse into one property per name
//! - constructor parameter properties become properties at the constructor's position
//! - overload signatures replace the implementation signature they belong to

use super::functions;
use super::helpers::{self, AccessorKind};
use crate::extractors::base::{ClassDecl, MethodMember, PropertyMember};
use crate::extractors::typescript::TypeScriptExtractor;
use std::collections::{HashMap, HashSet};
use tracing::trace;
use tree_sitter::Node;

/// Extract a class declaration
///
/// Anonymous classes (`export default class {}`) have no name to convert and yield `None`.
pub(super) fn extract_class(extractor: &TypeScriptExtractor, node: Node) -> Option<ClassDecl> {
    let name = extractor.base().get_name(&node)?;
    let generics = functions::extract_type_parameters(extractor, &node);
    let is_abstract = node.kind() == "abstract_class_declaration";

    let mut members = ClassMembers::default();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            members.visit(extractor, child);
        }
    }

    trace!(
        "class {}: {} properties, {} methods",
        name,
        members.properties.len(),
        members.methods.len()
    );

    Some(ClassDecl {
        name,
        generics,
        properties: members.properties,
        methods: members.methods,
        is_abstract,
    })
}

/// Member accumulator for one class body
#[derive(Default)]
struct ClassMembers {
    properties: Vec<PropertyMember>,
    methods: Vec<MethodMember>,
    /// Accessor name -> index into `properties`
    accessors: HashMap<(String, bool), usize>,
    /// Method names (with static flag) that have overload signatures
    overloaded: HashSet<(String, bool)>,
}

impl ClassMembers {
    fn visit(&mut self, extractor: &TypeScriptExtractor, node: Node) {
        match node.kind() {
            "public_field_definition" => {
                if let Some(property) = extract_field(extractor, node) {
                    self.properties.push(property);
                }
            }
            "method_definition" | "method_signature" | "abstract_method_signature" => {
                self.visit_method(extractor, node);
            }
            // Index signatures, static blocks, decorators and punctuation carry no members
            _ => {}
        }
    }

    fn visit_method(&mut self, extractor: &TypeScriptExtractor, node: Node) {
        let Some(method) = functions::extract_method(extractor, node) else {
            return;
        };

        if method.name == "constructor" {
            let params = functions::extract_parameter_properties(extractor, &node);
            self.properties.extend(params);
            return;
        }

        if let Some(kind) = helpers::accessor_kind(node) {
            self.add_accessor(kind, method);
            return;
        }

        let key = (method.name.clone(), method.is_static);
        if node.kind() == "method_signature" {
            self.overloaded.insert(key);
        } else if node.kind() == "method_definition" && self.overloaded.contains(&key) {
            // Implementation signature of an overloaded method is not externally visible
            trace!("skipping implementation signature of overloaded {}", method.name);
            return;
        }

        self.methods.push(method);
    }

    fn add_accessor(&mut self, kind: AccessorKind, method: MethodMember) {
        let type_expr = match kind {
            AccessorKind::Get => method.return_type.clone(),
            AccessorKind::Set => method
                .parameters
                .first()
                .and_then(|param| param.type_expr.clone()),
        };

        let key = (method.name.clone(), method.is_static);
        if let Some(&index) = self.accessors.get(&key) {
            let property = &mut self.properties[index];
            match kind {
                // Getter type wins over the setter parameter type
                AccessorKind::Get => {
                    if type_expr.is_some() {
                        property.type_expr = type_expr;
                    }
                }
                AccessorKind::Set => {
                    property.is_readonly = false;
                    if property.type_expr.is_none() {
                        property.type_expr = type_expr;
                    }
                }
            }
            return;
        }

        self.accessors.insert(key, self.properties.len());
        self.properties.push(PropertyMember {
            name: method.name,
            type_expr,
            visibility: method.visibility,
            is_optional: method.is_optional,
            is_static: method.is_static,
            is_readonly: kind == AccessorKind::Get,
        });
    }
}

/// Extract a `public_field_definition` as a property
fn extract_field(extractor: &TypeScriptExtractor, node: Node) -> Option<PropertyMember> {
    let name_node = node.child_by_field_name("name")?;
    if helpers::is_private_name(name_node) {
        return None;
    }

    Some(PropertyMember {
        name: extractor.base().get_node_text(&name_node),
        type_expr: extractor.base().get_annotation_type(&node, "type"),
        visibility: extractor.base().extract_visibility(&node),
        is_optional: helpers::has_modifier(node, "?"),
        is_static: helpers::is_static(node),
        is_readonly: helpers::has_modifier(node, "readonly"),
    })
}
