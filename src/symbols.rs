//! Symbol Table Builder
//!
//! Builds the set of type names resolvable inside one file. The table is
//! populated in a single pass and is immutable afterwards: classification can
//! only start once [`build_defined_types`] has returned.

use crate::error::{ConvertError, ConvertResult};
use crate::extractors::base::{Declaration, DeclarationTree, Import};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Delimiters separating a generic parameter's name from its bound or default
static GENERIC_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"=|\bextends\b").expect("generic delimiter regex is valid"));

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex is valid"));

/// Defined type names visible in one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: HashSet<String>,
}

impl SymbolTable {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// A copy of this table with `names` bound as well
    ///
    /// Type parameters of a function type or mapped type are only in scope
    /// inside that type.
    pub fn extended<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> SymbolTable {
        let mut extended = self.clone();
        extended.names.extend(names.into_iter().map(str::to_string));
        extended
    }

    /// Names in sorted order (stable output for diagnostics and tests)
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Build the defined-type table for converting a class with `target_class_generics`
///
/// Order of contributions: imports (file order), then every class, interface,
/// type alias and enum name, then the target class's generic parameter names.
pub fn build_defined_types(
    tree: &DeclarationTree,
    target_class_generics: &[String],
) -> ConvertResult<SymbolTable> {
    let mut names = HashSet::new();

    for import in &tree.imports {
        match import {
            Import::Namespace { alias } => {
                names.insert(alias.clone());
            }
            Import::Named {
                default_alias,
                specifiers,
            } => {
                if let Some(alias) = default_alias {
                    names.insert(alias.clone());
                }
                for specifier in specifiers {
                    names.insert(specifier.local_name().to_string());
                }
            }
        }
    }

    for declaration in &tree.declarations {
        match declaration {
            Declaration::Class(_)
            | Declaration::Interface(_)
            | Declaration::TypeAlias(_)
            | Declaration::Enum(_) => {
                names.insert(declaration.name().to_string());
            }
        }
    }

    for expression in target_class_generics {
        names.insert(generic_name(expression)?.to_string());
    }

    debug!("Built symbol table with {} defined types", names.len());
    Ok(SymbolTable { names })
}

/// Name of a generic parameter expression: the text before the first `=` or `extends`
///
/// `T` → `T`, `U extends string` → `U`, `V = number` → `V`.
pub fn generic_name(expression: &str) -> ConvertResult<&str> {
    let name = GENERIC_DELIMITER
        .split(expression)
        .next()
        .unwrap_or_default()
        .trim();
    // `const T` type parameters carry a modifier before the name
    let name = name.strip_prefix("const ").map(str::trim).unwrap_or(name);

    if IDENTIFIER.is_match(name) {
        Ok(name)
    } else {
        Err(ConvertError::MalformedGenericExpression {
            expression: expression.to_string(),
        })
    }
}
