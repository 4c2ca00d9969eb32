//! SourceFile - parsed source text ready for conversion
//!
//! Parsing happens exactly once, eagerly, in [`SourceFile::parse`]. Every later
//! read (class names, class lookup, conversion of any number of classes) consumes
//! the same owned [`DeclarationTree`] and never re-invokes tree-sitter.

use crate::error::{ConvertError, ConvertResult};
use crate::extractors::base::{BaseExtractor, ClassDecl, DeclarationTree};
use crate::extractors::typescript::TypeScriptExtractor;
use crate::language::{get_tree_sitter_language, Dialect};
use std::time::Instant;
use tracing::debug;
use tree_sitter::Parser;

/// Immutable source text plus its declaration tree
#[derive(Debug, Clone)]
pub struct SourceFile {
    text: String,
    dialect: Dialect,
    tree: DeclarationTree,
}

impl SourceFile {
    /// Parse source text into a declaration tree
    ///
    /// Fails with [`ConvertError::Parse`] when tree-sitter reports any error or
    /// missing node; the position is that of the first one in document order.
    pub fn parse(text: impl Into<String>, dialect: Dialect) -> ConvertResult<Self> {
        let text = text.into();
        let started = Instant::now();

        let mut parser = Parser::new();
        parser
            .set_language(&get_tree_sitter_language(dialect))
            .map_err(|e| ConvertError::Grammar(format!("{} ({})", e, dialect)))?;

        let syntax_tree = parser.parse(&text, None).ok_or_else(|| ConvertError::Parse {
            line: 1,
            column: 1,
            message: "parser produced no tree".to_string(),
        })?;

        let root = syntax_tree.root_node();
        if root.has_error() {
            let base = BaseExtractor::new(&text);
            let error_node = base.find_first_error(&root).unwrap_or(root);
            let position = error_node.start_position();
            let message = if error_node.is_missing() {
                format!("missing '{}'", error_node.kind())
            } else {
                let snippet = base.get_node_text(&error_node);
                format!(
                    "unexpected '{}'",
                    BaseExtractor::truncate_string(snippet.trim(), 40)
                )
            };
            return Err(ConvertError::Parse {
                line: position.row + 1,
                column: position.column + 1,
                message,
            });
        }

        let tree = TypeScriptExtractor::new(&text).extract_declarations(&syntax_tree);

        debug!(
            "Parsed {} {} bytes: {} imports, {} declarations in {:?}",
            dialect,
            text.len(),
            tree.imports.len(),
            tree.declarations.len(),
            started.elapsed()
        );

        Ok(Self {
            text,
            dialect,
            tree,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn declarations(&self) -> &DeclarationTree {
        &self.tree
    }

    /// Class names in source order
    pub fn class_names(&self) -> Vec<String> {
        self.tree.classes().map(|class| class.name.clone()).collect()
    }

    /// Look up a class, failing with [`ConvertError::ClassNotFound`]
    pub fn class(&self, name: &str) -> ConvertResult<&ClassDecl> {
        self.tree
            .find_class(name)
            .ok_or_else(|| ConvertError::ClassNotFound {
                name: name.to_string(),
                available: self.class_names(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_in_source_order() {
        let source = SourceFile::parse(
            "class B {}\ninterface I {}\nexport class A {}\nclass C {}\n",
            Dialect::TypeScript,
        )
        .unwrap();
        assert_eq!(source.class_names(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let err = SourceFile::parse("class A {\n  value: number;\n}\n}}}\n", Dialect::TypeScript)
            .unwrap_err();
        match err {
            ConvertError::Parse {
                line,
                column,
                message,
            } => {
                assert_eq!((line, column), (4, 1));
                assert!(message.starts_with("unexpected '}"), "{}", message);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_token_reports_position() {
        let err = SourceFile::parse("class A { x: number", Dialect::TypeScript).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Parse {
                line: 1,
                column: 20,
                message: "missing '}'".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "import { X } from './x';\nclass A<T> { x: X; read(): T { return null as any; } }";
        let first = SourceFile::parse(text, Dialect::TypeScript).unwrap();
        let second = SourceFile::parse(text, Dialect::TypeScript).unwrap();
        assert_eq!(first.declarations(), second.declarations());
    }

    #[test]
    fn test_class_lookup_failure_lists_candidates() {
        let source = SourceFile::parse("class Box {}", Dialect::TypeScript).unwrap();
        assert_eq!(
            source.class("DoesNotExist").unwrap_err(),
            ConvertError::ClassNotFound {
                name: "DoesNotExist".to_string(),
                available: vec!["Box".to_string()],
            }
        );
    }

    #[test]
    fn test_tsx_dialect() {
        let text = "class View { render(): JSX.Element { return <div />; } }";
        let source = SourceFile::parse(text, Dialect::Tsx).unwrap();
        assert_eq!(source.class_names(), vec!["View"]);
        assert_eq!(source.dialect(), Dialect::Tsx);
    }

    #[test]
    fn test_empty_file() {
        let source = SourceFile::parse("", Dialect::TypeScript).unwrap();
        assert!(source.class_names().is_empty());
        assert!(source.declarations().imports.is_empty());
    }
}
