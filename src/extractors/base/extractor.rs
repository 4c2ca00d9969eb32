// BaseExtractor implementation for the parser adapter
//
// Holds the source text for the duration of one parse and provides the text
// accessors every declaration extractor needs.

use tree_sitter::Node;

use super::types::Visibility;

/// Shared state for the TypeScript declaration extractors
pub struct BaseExtractor<'a> {
    pub content: &'a str,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Text of a type annotation without its leading `:`
    ///
    /// Works for `type_annotation`, `type_predicate_annotation` and
    /// `asserts_annotation` alike.
    pub fn get_annotation_type(&self, node: &Node, field_name: &str) -> Option<String> {
        let text = self.get_field_text(node, field_name)?;
        let type_text = text.trim_start().trim_start_matches(':').trim();
        if type_text.is_empty() {
            None
        } else {
            Some(type_text.to_string())
        }
    }

    /// Get the `name` field text, if the node has one
    pub fn get_name(&self, node: &Node) -> Option<String> {
        self.get_field_text(node, "name")
    }

    /// Extract visibility from an `accessibility_modifier` child
    ///
    /// Returns `None` when the member has no explicit modifier.
    pub fn extract_visibility(&self, node: &Node) -> Option<Visibility> {
        let modifier = self.find_child_by_type(node, "accessibility_modifier")?;
        self.get_node_text(&modifier).trim().parse().ok()
    }

    /// Safely truncate a string to a maximum number of characters (not bytes)
    /// This handles UTF-8 multi-byte characters correctly by truncating at character boundaries
    pub fn truncate_string(text: &str, max_chars: usize) -> String {
        let char_count = text.chars().count();
        if char_count <= max_chars {
            text.to_string()
        } else {
            text.chars().take(max_chars).collect::<String>() + "..."
        }
    }
}
