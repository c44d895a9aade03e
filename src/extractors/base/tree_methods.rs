// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Find nodes by type anywhere below `node`, in document order.
    ///
    /// Uses an explicit worklist instead of recursion so deeply nested files
    /// cannot exhaust the call stack.
    pub fn find_nodes_by_type<'a>(&self, node: &Node<'a>, node_type: &str) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        let mut stack = vec![*node];

        while let Some(current) = stack.pop() {
            if current.kind() == node_type {
                nodes.push(current);
            }
            // Push in reverse so the leftmost child is visited first
            let mut cursor = current.walk();
            let children: Vec<Node<'a>> = current.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }

        nodes
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| c.kind() == child_type);
        found
    }

    /// Find child by multiple types
    pub fn find_child_by_types<'a>(&self, node: &Node<'a>, types: &[&str]) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| types.contains(&c.kind()));
        found
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_find_nodes_by_type_document_order() {
        let code = "class Outer {\n  class Inner {}\n}\nclass Second {}\n";
        let tree = parse(code);
        let base = BaseExtractor::new("java".into(), "Outer.java".into(), code.into());

        let names: Vec<String> = base
            .find_nodes_by_type(&tree.root_node(), "class_declaration")
            .iter()
            .filter_map(|n| base.get_field_text(n, "name"))
            .collect();

        assert_eq!(names, vec!["Outer", "Inner", "Second"]);
    }

    #[test]
    fn test_deeply_nested_tree_does_not_overflow() {
        let depth = 2_000;
        let mut code = String::from("class Deep { int f() { return ");
        code.push_str(&"(".repeat(depth));
        code.push('1');
        code.push_str(&")".repeat(depth));
        code.push_str("; } }\n");

        let tree = parse(&code);
        let base = BaseExtractor::new("java".into(), "Deep.java".into(), code.clone());
        let found = base.find_nodes_by_type(&tree.root_node(), "parenthesized_expression");
        assert_eq!(found.len(), depth);
    }
}
