// BaseExtractor
//
// Holds the source text for one file and turns tree-sitter nodes back into
// text and 1-based line ranges.

use tracing::debug;
use tree_sitter::Node;

/// Base implementation shared by language extractors
pub struct BaseExtractor {
    pub language: String,
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        debug!(
            "BaseExtractor for {} file '{}' ({} bytes)",
            language,
            file_path,
            content.len()
        );

        Self {
            language,
            file_path,
            content,
        }
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

    /// Inclusive 1-based `(start_line, end_line)` of a node
    pub fn line_range(&self, node: &Node) -> (u32, u32) {
        let start = node.start_position().row as u32 + 1;
        let end = node.end_position().row as u32 + 1;
        (start, end.max(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    #[test]
    fn test_line_range_is_one_based_inclusive() {
        let code = "class A {\n  void f() {\n  }\n}\n";
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        let base = BaseExtractor::new("java".into(), "A.java".into(), code.into());

        let class_node = tree.root_node().child(0).unwrap();
        assert_eq!(class_node.kind(), "class_declaration");
        assert_eq!(base.line_range(&class_node), (1, 4));

        let method = base.find_nodes_by_type(&tree.root_node(), "method_declaration")[0];
        assert_eq!(base.line_range(&method), (2, 3));
        assert_eq!(base.get_node_text(&method), "void f() {\n  }");
    }
}
