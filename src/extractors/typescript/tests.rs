use super::TypeScriptExtractor;
use crate::extractors::base::{Declaration, DeclarationTree, Import, Visibility};
use crate::language::{get_tree_sitter_language, Dialect};
use tree_sitter::Parser;

fn extract(code: &str) -> DeclarationTree {
    let mut parser = Parser::new();
    parser
        .set_language(&get_tree_sitter_language(Dialect::TypeScript))
        .unwrap();
    let tree = parser.parse(code, None).unwrap();
    assert!(!tree.root_node().has_error(), "test source must parse cleanly");
    TypeScriptExtractor::new(code).extract_declarations(&tree)
}

#[test]
fn test_box_class_members() {
    let tree = extract("class Box<T> { private value: T; getValue(): T { return this.value; } }");

    let class = tree.find_class("Box").unwrap();
    assert_eq!(class.generics, vec!["T"]);
    assert!(!class.is_abstract);

    assert_eq!(class.properties.len(), 1);
    let value = &class.properties[0];
    assert_eq!(value.name, "value");
    assert_eq!(value.type_expr.as_deref(), Some("T"));
    assert_eq!(value.visibility, Some(Visibility::Private));

    assert_eq!(class.methods.len(), 1);
    let get_value = &class.methods[0];
    assert_eq!(get_value.name, "getValue");
    assert_eq!(get_value.visibility, None);
    assert!(get_value.parameters.is_empty());
    assert_eq!(get_value.return_type.as_deref(), Some("T"));
}

#[test]
fn test_generic_bounds_and_defaults_kept_raw() {
    let tree = extract("class Pair<T, U extends string, V = number> {}");
    let class = tree.find_class("Pair").unwrap();
    assert_eq!(class.generics, vec!["T", "U extends string", "V = number"]);
}

#[test]
fn test_member_modifiers() {
    let code = r#"
abstract class Shape {
    static readonly sides: number = 0;
    protected label?: string;
    abstract area(): number;
    public static async load(id: string, retries?: number, delay = 10): Promise<Shape> {
        throw new Error(id);
    }
    describe?(): string { return ""; }
}
"#;
    let tree = extract(code);
    let class = tree.find_class("Shape").unwrap();
    assert!(class.is_abstract);

    let sides = &class.properties[0];
    assert!(sides.is_static);
    assert!(sides.is_readonly);
    assert!(!sides.is_optional);

    let label = &class.properties[1];
    assert_eq!(label.visibility, Some(Visibility::Protected));
    assert!(label.is_optional);
    assert_eq!(label.type_expr.as_deref(), Some("string"));

    let area = &class.methods[0];
    assert_eq!(area.name, "area");
    assert!(area.is_abstract);
    assert_eq!(area.return_type.as_deref(), Some("number"));

    let load = &class.methods[1];
    assert!(load.is_static);
    assert!(load.is_async);
    assert_eq!(load.visibility, Some(Visibility::Public));
    assert_eq!(load.return_type.as_deref(), Some("Promise<Shape>"));
    let params: Vec<_> = load
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.type_expr.as_deref(), p.is_optional))
        .collect();
    assert_eq!(
        params,
        vec![
            ("id", Some("string"), false),
            ("retries", Some("number"), true),
            ("delay", None, true),
        ]
    );

    let describe = &class.methods[2];
    assert!(describe.is_optional);
}

#[test]
fn test_imports_binding_forms() {
    let code = r#"
import Default, { Foo, Bar as Baz } from "./things";
import * as ns from "./ns";
import Both, * as other from "./both";
import fs = require("fs");
import "./side-effect";
class A {}
"#;
    let tree = extract(code);
    assert_eq!(
        tree.imports,
        vec![
            Import::Named {
                default_alias: Some("Default".to_string()),
                specifiers: vec![
                    crate::extractors::base::ImportSpecifier {
                        specifier: "Foo".to_string(),
                        alias: None,
                    },
                    crate::extractors::base::ImportSpecifier {
                        specifier: "Bar".to_string(),
                        alias: Some("Baz".to_string()),
                    },
                ],
            },
            Import::Namespace {
                alias: "ns".to_string(),
            },
            Import::Named {
                default_alias: Some("Both".to_string()),
                specifiers: Vec::new(),
            },
            Import::Namespace {
                alias: "other".to_string(),
            },
            Import::Named {
                default_alias: Some("fs".to_string()),
                specifiers: Vec::new(),
            },
        ]
    );
}

#[test]
fn test_exported_and_ambient_declarations() {
    let code = r#"
export interface Shape { area(): number }
export type Id = string;
enum Color { Red, Green }
export class Circle {}
declare class Legacy {}
export abstract class Base {}
function helper() { class Inner {} }
"#;
    let tree = extract(code);
    let names: Vec<(&str, &str)> = tree
        .declarations
        .iter()
        .map(|decl| {
            let kind = match decl {
                Declaration::Class(_) => "class",
                Declaration::Interface(_) => "interface",
                Declaration::TypeAlias(_) => "type",
                Declaration::Enum(_) => "enum",
            };
            (kind, decl.name())
        })
        .collect();
    assert_eq!(
        names,
        vec![
            ("interface", "Shape"),
            ("type", "Id"),
            ("enum", "Color"),
            ("class", "Circle"),
            ("class", "Legacy"),
            ("class", "Base"),
        ]
    );
}

#[test]
fn test_accessors_collapse_into_properties() {
    let code = r#"
class Account {
    get balance(): number { return 0; }
    get owner(): string { return ""; }
    set owner(value: string) {}
    set nickname(value: string) {}
}
"#;
    let tree = extract(code);
    let class = tree.find_class("Account").unwrap();
    assert!(class.methods.is_empty());

    let props: Vec<_> = class
        .properties
        .iter()
        .map(|p| (p.name.as_str(), p.type_expr.as_deref(), p.is_readonly))
        .collect();
    assert_eq!(
        props,
        vec![
            ("balance", Some("number"), true),
            ("owner", Some("string"), false),
            ("nickname", Some("string"), false),
        ]
    );
}

#[test]
fn test_constructor_parameter_properties() {
    let code = r#"
class Service {
    name: string;
    constructor(private readonly repo: Repo, public port?: number, plain: string) {}
    run(): void {}
}
"#;
    let tree = extract(code);
    let class = tree.find_class("Service").unwrap();

    let props: Vec<_> = class
        .properties
        .iter()
        .map(|p| (p.name.as_str(), p.visibility, p.is_readonly, p.is_optional))
        .collect();
    assert_eq!(
        props,
        vec![
            ("name", None, false, false),
            ("repo", Some(Visibility::Private), true, false),
            ("port", Some(Visibility::Public), false, true),
        ]
    );
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].name, "run");
}

#[test]
fn test_overloads_replace_implementation() {
    let code = r#"
class Parser {
    parse(input: string): number;
    parse(input: Buffer): number;
    parse(input: any): number { return 0; }
    reset(): void {}
}
"#;
    let tree = extract(code);
    let class = tree.find_class("Parser").unwrap();
    let signatures: Vec<_> = class
        .methods
        .iter()
        .map(|m| {
            (
                m.name.as_str(),
                m.parameters.first().and_then(|p| p.type_expr.as_deref()),
            )
        })
        .collect();
    assert_eq!(
        signatures,
        vec![
            ("parse", Some("string")),
            ("parse", Some("Buffer")),
            ("reset", None),
        ]
    );
}

#[test]
fn test_private_names_and_method_generics() {
    let code = r#"
class Store {
    #cache: Map<string, number> = new Map();
    #evict(): void {}
    find<K extends string>(key: K): K { return key; }
}
"#;
    let tree = extract(code);
    let class = tree.find_class("Store").unwrap();
    assert!(class.properties.is_empty());
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].type_parameters, vec!["K extends string"]);
    assert_eq!(class.methods[0].parameters[0].type_expr.as_deref(), Some("K"));
}
