// Declaration tree types for the class-to-interface converter
//
// All data structures produced by the parser adapter. Every type is owned and
// position-independent: once a tree is built, the tree-sitter tree is dropped.

use serde::{Deserialize, Serialize};

/// Parsed contents of one source file - imports and top-level declarations in source order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeclarationTree {
    pub imports: Vec<Import>,
    pub declarations: Vec<Declaration>,
}

impl DeclarationTree {
    /// Iterate over class declarations in source order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Class(class) => Some(class),
            Declaration::Interface(_) | Declaration::TypeAlias(_) | Declaration::Enum(_) => None,
        })
    }

    /// Find a class declaration by exact name
    pub fn find_class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes().find(|class| class.name == name)
    }
}

/// A named top-level declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    Class(ClassDecl),
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    Enum(EnumDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(decl) => &decl.name,
            Declaration::Interface(decl) => &decl.name,
            Declaration::TypeAlias(decl) => &decl.name,
            Declaration::Enum(decl) => &decl.name,
        }
    }
}

/// A class declaration with its generics and members
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    pub name: String,
    /// Raw type-parameter text, e.g. `T`, `U extends string`, `V = number`
    pub generics: Vec<String>,
    pub properties: Vec<PropertyMember>,
    pub methods: Vec<MethodMember>,
    /// Declared `abstract class`; carried into `describe_file` output, not the interface
    pub is_abstract: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeAliasDecl {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnumDecl {
    pub name: String,
}

/// A class property (field, accessor pair, or constructor parameter property)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMember {
    pub name: String,
    /// Declared type without the leading `:`; `None` renders as `any`
    pub type_expr: Option<String>,
    /// `None` when the source has no accessibility modifier
    pub visibility: Option<Visibility>,
    pub is_optional: bool,
    pub is_static: bool,
    pub is_readonly: bool,
}

/// A class method (concrete, abstract, or overload signature)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodMember {
    pub name: String,
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_optional: bool,
    pub is_async: bool,
    /// The method's own raw type-parameter declarations
    pub type_parameters: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Binding pattern text, e.g. `x`, `...rest`, `{ a, b }`
    pub name: String,
    pub type_expr: Option<String>,
    /// `x?: T` or a parameter with a default value
    pub is_optional: bool,
}

/// An import statement's contribution to the file's names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Import {
    /// `import * as alias from "..."`
    Namespace { alias: String },
    /// `import Default, { a, b as c } from "..."`
    #[serde(rename_all = "camelCase")]
    Named {
        default_alias: Option<String>,
        specifiers: Vec<ImportSpecifier>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportSpecifier {
    pub specifier: String,
    pub alias: Option<String>,
}

impl ImportSpecifier {
    /// The name this specifier binds locally - the rename wins
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.specifier)
    }
}

/// Member accessibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// The keyword as written in source
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "protected" => Ok(Visibility::Protected),
            _ => Err(format!("Unknown visibility: {}", s)),
        }
    }
}
