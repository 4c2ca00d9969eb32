//! Member Compiler
//!
//! Renders one canonical signature line per class member. Lines carry no
//! indentation or statement separator; that is the renderer's job.
//!
//! Property: `<visibility> [static] [readonly] <name>[?]: <type>`
//! Method:   `<visibility> [abstract] [static] [async] <name>[<G>](<params>)[?]: <return>`

use crate::classifier::TypeClassifier;
use crate::extractors::base::{MethodMember, Parameter, PropertyMember, Visibility};
use crate::symbols::{generic_name, SymbolTable};
use indexmap::IndexSet;

/// Type rendered when a member or parameter declares none
const IMPLICIT_TYPE: &str = "any";

/// A rendered method line plus the generics it had to re-declare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMethod {
    pub text: String,
    /// Free generics in first-occurrence order (parameters left to right, then return type)
    pub free_generics: IndexSet<String>,
}

/// Render a property signature
pub fn render_property(property: &PropertyMember) -> String {
    let mut tokens = vec![visibility_keyword(property.visibility)];
    if property.is_static {
        tokens.push("static");
    }
    if property.is_readonly {
        tokens.push("readonly");
    }

    let optional = if property.is_optional { "?" } else { "" };
    let type_expr = property.type_expr.as_deref().unwrap_or(IMPLICIT_TYPE);
    format!("{} {}{}: {}", tokens.join(" "), property.name, optional, type_expr)
}

/// Render a method signature, surfacing free generics as method-level type parameters
pub fn render_method(
    method: &MethodMember,
    classifier: &TypeClassifier,
    table: &SymbolTable,
) -> RenderedMethod {
    let mut free_generics = IndexSet::new();
    for parameter in &method.parameters {
        free_generics.extend(classifier.collect_free_generics(parameter.type_expr.as_deref(), table));
    }
    free_generics.extend(classifier.collect_free_generics(method.return_type.as_deref(), table));

    let mut tokens = vec![visibility_keyword(method.visibility)];
    if method.is_abstract {
        tokens.push("abstract");
    }
    if method.is_static {
        tokens.push("static");
    }
    if method.is_async {
        tokens.push("async");
    }

    let optional = if method.is_optional { "?" } else { "" };
    let generic_clause = render_generic_clause(method, &free_generics);
    let parameters = method
        .parameters
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join(", ");
    let return_type = method.return_type.as_deref().unwrap_or(IMPLICIT_TYPE);

    let text = format!(
        "{} {}{}({}){}: {}",
        tokens.join(" "),
        method.name,
        generic_clause,
        parameters,
        optional,
        return_type
    );

    RenderedMethod {
        text,
        free_generics,
    }
}

fn visibility_keyword(visibility: Option<Visibility>) -> &'static str {
    visibility.unwrap_or(Visibility::Public).keyword()
}

fn render_parameter(parameter: &Parameter) -> String {
    let optional = if parameter.is_optional { "?" } else { "" };
    let type_expr = parameter.type_expr.as_deref().unwrap_or(IMPLICIT_TYPE);
    format!("{}{}: {}", parameter.name, optional, type_expr)
}

/// `<G1, G2>` from the free generics; empty when there are none
///
/// A free generic that names one of the method's own type parameters keeps that
/// parameter's declaration, bound and default included.
fn render_generic_clause(method: &MethodMember, free_generics: &IndexSet<String>) -> String {
    if free_generics.is_empty() {
        return String::new();
    }

    let declarations: Vec<&str> = free_generics
        .iter()
        .map(|generic| {
            method
                .type_parameters
                .iter()
                .find(|declared| generic_name(declared).ok() == Some(generic.as_str()))
                .map(String::as_str)
                .unwrap_or(generic.as_str())
        })
        .collect();
    format!("<{}>", declarations.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, type_expr: Option<&str>) -> Parameter {
        Parameter {
            name: name.to_string(),
            type_expr: type_expr.map(str::to_string),
            is_optional: false,
        }
    }

    fn method(name: &str, parameters: Vec<Parameter>, return_type: Option<&str>) -> MethodMember {
        MethodMember {
            name: name.to_string(),
            parameters,
            return_type: return_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_property_defaults_to_public_any() {
        let property = PropertyMember {
            name: "data".to_string(),
            ..Default::default()
        };
        assert_eq!(render_property(&property), "public data: any");
    }

    #[test]
    fn test_property_qualifiers() {
        let property = PropertyMember {
            name: "count".to_string(),
            type_expr: Some("number".to_string()),
            visibility: Some(Visibility::Protected),
            is_optional: true,
            is_static: true,
            is_readonly: true,
        };
        assert_eq!(
            render_property(&property),
            "protected static readonly count?: number"
        );
    }

    #[test]
    fn test_method_surfaces_free_generic() {
        let classifier = TypeClassifier::default();
        let rendered = render_method(
            &method("foo", vec![param("x", Some("K"))], Some("K")),
            &classifier,
            &SymbolTable::default(),
        );
        assert_eq!(rendered.text, "public foo<K>(x: K): K");
        assert_eq!(rendered.free_generics.into_iter().collect::<Vec<_>>(), vec!["K"]);
    }

    #[test]
    fn test_bound_generics_are_not_redeclared() {
        let classifier = TypeClassifier::default();
        let table: SymbolTable = ["T"].into_iter().collect();
        let rendered = render_method(&method("get", Vec::new(), Some("T")), &classifier, &table);
        assert_eq!(rendered.text, "public get(): T");
        assert!(rendered.free_generics.is_empty());
    }

    #[test]
    fn test_free_generic_order_params_then_return() {
        let classifier = TypeClassifier::default();
        let rendered = render_method(
            &method(
                "zip",
                vec![param("a", Some("B")), param("b", Some("A | B"))],
                Some("[A, B] | C"),
            ),
            &classifier,
            &SymbolTable::default(),
        );
        assert_eq!(rendered.text, "public zip<B, A, C>(a: B, b: A | B): [A, B] | C");
    }

    #[test]
    fn test_method_qualifier_order() {
        let classifier = TypeClassifier::default();
        let member = MethodMember {
            visibility: Some(Visibility::Private),
            is_abstract: true,
            is_static: true,
            is_async: true,
            is_optional: true,
            ..method("load", vec![param("id", None)], None)
        };
        let rendered = render_method(&member, &classifier, &SymbolTable::default());
        assert_eq!(
            rendered.text,
            "private abstract static async load(id: any)?: any"
        );
    }

    #[test]
    fn test_optional_marker_follows_parameter_list() {
        let classifier = TypeClassifier::default();
        let member = MethodMember {
            is_optional: true,
            ..method("map", vec![param("x", Some("K"))], Some("K"))
        };
        let rendered = render_method(&member, &classifier, &SymbolTable::default());
        assert_eq!(rendered.text, "public map<K>(x: K)?: K");
    }

    #[test]
    fn test_method_keeps_own_generic_bounds() {
        let classifier = TypeClassifier::default();
        let member = MethodMember {
            type_parameters: vec!["K extends string".to_string(), "V = number".to_string()],
            ..method(
                "pick",
                vec![param("key", Some("K")), param("fallback", Some("V"))],
                Some("Record<K, V>"),
            )
        };
        let rendered = render_method(&member, &classifier, &SymbolTable::default());
        assert_eq!(
            rendered.text,
            "public pick<K extends string, V = number>(key: K, fallback: V): Record<K, V>"
        );
    }

    #[test]
    fn test_optional_and_rest_parameters() {
        let classifier = TypeClassifier::default();
        let member = method(
            "log",
            vec![
                Parameter {
                    name: "level".to_string(),
                    type_expr: Some("string".to_string()),
                    is_optional: true,
                },
                param("...args", Some("unknown[]")),
            ],
            Some("void"),
        );
        let rendered = render_method(&member, &classifier, &SymbolTable::default());
        assert_eq!(
            rendered.text,
            "public log(level?: string, ...args: unknown[]): void"
        );
    }
}
