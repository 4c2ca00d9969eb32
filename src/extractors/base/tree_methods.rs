// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor<'_> {
    /// Find first child by type
    pub fn find_child_by_type<'t>(&self, node: &Node<'t>, child_type: &str) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// Find the first `ERROR` or `MISSING` node in document order
    #[allow(clippy::only_used_in_recursion)] // &self used in recursive calls
    pub fn find_first_error<'t>(&self, node: &Node<'t>) -> Option<Node<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(*node);
        }
        if !node.has_error() {
            return None;
        }

        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        children
            .iter()
            .find_map(|child| self.find_first_error(child))
            .or(Some(*node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{get_tree_sitter_language, Dialect};
    use tree_sitter::Parser;

    fn parse(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&get_tree_sitter_language(Dialect::TypeScript))
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_find_first_error_locates_broken_member() {
        let code = "class A {\n  value: number;\n  broken( {\n}\n";
        let tree = parse(code);
        let base = BaseExtractor::new(code);

        let error = base.find_first_error(&tree.root_node()).unwrap();
        assert!(error.is_error() || error.is_missing());
    }

    #[test]
    fn test_find_first_error_on_valid_source() {
        let code = "class A { value: number; }";
        let tree = parse(code);
        let base = BaseExtractor::new(code);

        assert!(base.find_first_error(&tree.root_node()).is_none());
    }

    #[test]
    fn test_find_child_by_type() {
        let code = "class A<T> {}";
        let tree = parse(code);
        let base = BaseExtractor::new(code);
        let class = tree.root_node().child(0).unwrap();

        let params = base.find_child_by_type(&class, "type_parameters").unwrap();
        assert_eq!(base.get_node_text(&params), "<T>");
        assert!(base.find_child_by_type(&class, "class_heritage").is_none());
    }
}
